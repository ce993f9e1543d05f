//! Multi-step course authoring wizard.
//!
//! [`WizardController`] owns the in-progress draft and the active step and is
//! the only writer of both. Submissions are split into prepare / execute /
//! complete so a UI can release its borrow of the controller while the
//! request is pending; each submission carries a token and a response is only
//! applied while its token is still the one in flight.

use crate::{
    course_form::{self, CourseFormValues, CoursePayload},
    error::SubmitMode,
    ApiError, CourseApi, CourseFormError, CourseRecord,
};

/// Course information page.
pub const FIRST_STEP: u8 = 1;
/// Course builder page.
pub const BUILDER_STEP: u8 = 2;
/// Publish page.
pub const LAST_STEP: u8 = 3;

/// Draft and step visible to every wizard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardContext {
    draft: Option<CourseRecord>,
    step: u8,
    edit_course: bool,
}

impl Default for WizardContext {
    fn default() -> Self {
        Self {
            draft: None,
            step: FIRST_STEP,
            edit_course: false,
        }
    }
}

impl WizardContext {
    /// Last server-confirmed draft.
    pub fn draft(&self) -> Option<&CourseRecord> {
        self.draft.as_ref()
    }

    /// Replaces the draft.
    pub fn set_draft(&mut self, record: CourseRecord) {
        self.draft = Some(record);
    }

    /// Active step, `FIRST_STEP..=LAST_STEP`.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Moves to `step`, clamped to the wizard's range.
    pub fn set_step(&mut self, step: u8) {
        self.step = step.clamp(FIRST_STEP, LAST_STEP);
    }

    /// Whether the information form edits the draft instead of creating one.
    pub fn edit_course(&self) -> bool {
        self.edit_course
    }

    /// Writes draft and step together.
    pub fn commit(&mut self, record: CourseRecord, step: u8) {
        self.draft = Some(record);
        self.set_step(step);
    }

    fn next_step(&self) -> u8 {
        self.step.saturating_add(1).min(LAST_STEP)
    }
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// Validated request waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    token: SubmitToken,
    payload: CoursePayload,
}

impl PendingSubmission {
    /// Token the response must present to [`WizardController::complete`].
    pub fn token(&self) -> SubmitToken {
        self.token
    }

    /// Request body.
    pub fn payload(&self) -> &CoursePayload {
        &self.payload
    }

    /// Create or update.
    pub fn mode(&self) -> SubmitMode {
        self.payload.mode()
    }
}

/// What [`WizardController::complete`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server record is the new draft and the wizard advanced.
    Applied(CourseRecord),
    /// The wizard moved on before the response arrived; nothing changed.
    Stale,
}

/// Sends a prepared submission. Does not touch the controller.
pub async fn execute<A>(api: &A, pending: &PendingSubmission) -> Result<CourseRecord, ApiError>
where
    A: CourseApi + ?Sized,
{
    match pending.mode() {
        SubmitMode::Create => api.create_course(pending.payload()).await,
        SubmitMode::Update => api.edit_course(pending.payload()).await,
    }
}

/// Single owner of the wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    context: WizardContext,
    generation: u64,
    in_flight: Option<SubmitToken>,
}

impl WizardController {
    /// Fresh wizard in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for wizard pages.
    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    /// Resets to an empty create flow.
    pub fn start_create(&mut self) {
        self.abandon();
        self.context = WizardContext::default();
    }

    /// Resets to editing `record` from the first step.
    pub fn start_edit(&mut self, record: CourseRecord) {
        self.abandon();
        self.context = WizardContext {
            draft: Some(record),
            step: FIRST_STEP,
            edit_course: true,
        };
    }

    /// Returns to the information form; an existing draft is edited, not
    /// recreated.
    pub fn back_to_information(&mut self) {
        self.context.edit_course = self.context.draft.is_some();
        self.context.set_step(FIRST_STEP);
    }

    /// Initial form values for the information page.
    pub fn form_values(&self) -> CourseFormValues {
        let baseline = self.context.draft.as_ref().filter(|_| self.context.edit_course);
        CourseFormValues::initialize(baseline)
    }

    /// True while a submission awaits its response.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Advances without saving; only meaningful in edit mode.
    pub fn continue_without_saving(&mut self) -> bool {
        if !self.context.edit_course || self.is_submitting() {
            return false;
        }
        let next = self.context.next_step();
        self.context.set_step(next);
        true
    }

    /// Moves from a later page to the next one, saturating at the last step.
    pub fn advance(&mut self) {
        if self.context.draft.is_some() && self.context.step >= BUILDER_STEP {
            let next = self.context.next_step();
            self.context.set_step(next);
        }
    }

    /// Drops any in-flight submission so its response is ignored.
    pub fn abandon(&mut self) {
        if let Some(token) = self.in_flight.take() {
            tracing::debug!(token = token.0, "abandoned in-flight course submission");
        }
    }

    /// Validates, diffs and builds the request without sending it.
    pub fn prepare_submit(
        &mut self,
        values: &CourseFormValues,
    ) -> Result<PendingSubmission, CourseFormError> {
        if self.in_flight.is_some() {
            tracing::warn!("rejected course submission while another is in flight");
            return Err(CourseFormError::SubmitInFlight);
        }

        course_form::validate(values).map_err(CourseFormError::Validation)?;

        let payload = match self.context.draft.as_ref().filter(|_| self.context.edit_course) {
            Some(baseline) => {
                let diff = course_form::compute_diff(values, baseline);
                if diff.is_empty() {
                    return Err(CourseFormError::NoChanges);
                }
                CoursePayload::update(&baseline.id, &diff)
            },
            None => CoursePayload::create(values),
        };

        self.generation += 1;
        let token = SubmitToken(self.generation);
        self.in_flight = Some(token);
        Ok(PendingSubmission {
            token,
            payload,
        })
    }

    /// Applies the response of `pending` if it is still the current
    /// submission.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        result: Result<CourseRecord, ApiError>,
    ) -> Result<SubmitOutcome, CourseFormError> {
        if self.in_flight != Some(pending.token) {
            tracing::warn!(token = pending.token.0, "ignored stale course submission response");
            return Ok(SubmitOutcome::Stale);
        }
        self.in_flight = None;

        match result {
            Ok(record) => {
                let next = self.context.next_step();
                tracing::info!(
                    course_id = %record.id,
                    mode = %pending.mode(),
                    step = next,
                    "course draft saved"
                );
                self.context.commit(record.clone(), next);
                Ok(SubmitOutcome::Applied(record))
            },
            Err(source) => Err(CourseFormError::Submission {
                mode: pending.mode(),
                source,
            }),
        }
    }

    /// Prepares, sends and completes one submission.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        values: &CourseFormValues,
    ) -> Result<SubmitOutcome, CourseFormError>
    where
        A: CourseApi + ?Sized,
    {
        let pending = self.prepare_submit(values)?;
        let result = execute(api, &pending).await;
        self.complete(pending, result)
    }
}
