use std::{cell::RefCell, rc::Rc};

use coursehub_shared::{wizard::WizardContext, WizardController};
use yew::prelude::*;

/// Re-render counter for the wizard provider.
#[derive(Default)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        Rc::new(Revision(self.0 + 1))
    }
}

/// Handle to the single wizard controller of the app.
///
/// Borrows of the controller never outlive a callback, so they cannot overlap
/// a pending request.
#[derive(Clone)]
pub struct WizardHandle {
    controller: Rc<RefCell<WizardController>>,
    revision: u64,
    notify: UseReducerDispatcher<Revision>,
}

impl PartialEq for WizardHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && self.revision == other.revision
    }
}

impl WizardHandle {
    /// Copy of the state pages render from.
    pub fn snapshot(&self) -> WizardContext {
        self.controller.borrow().context().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.borrow().is_submitting()
    }

    /// Runs `f` against the controller, then re-renders every consumer.
    pub fn update<R>(&self, f: impl FnOnce(&mut WizardController) -> R) -> R {
        let result = f(&mut self.controller.borrow_mut());
        self.notify.dispatch(());
        result
    }

    /// Read-only access without triggering a re-render.
    pub fn read<R>(&self, f: impl FnOnce(&WizardController) -> R) -> R {
        f(&self.controller.borrow())
    }
}

#[derive(Properties, PartialEq)]
pub struct WizardProviderProps {
    pub children: Html,
}

#[function_component(WizardProvider)]
pub fn wizard_provider(props: &WizardProviderProps) -> Html {
    let controller = use_mut_ref(WizardController::new);
    let revision = use_reducer(Revision::default);

    let handle = WizardHandle {
        controller,
        revision: revision.0,
        notify: revision.dispatcher(),
    };

    html! {
        <ContextProvider<WizardHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<WizardHandle>>
    }
}
