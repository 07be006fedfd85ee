use dioxus::prelude::*;

use services::WizardStep;

use crate::context::AppContext;
use crate::views::{CollectView, SetupView, ViewError};
use crate::vm::{WizardIntent, WizardVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn WizardView() -> Element {
    let ctx = use_context::<AppContext>();
    let workflow = ctx.workflow();
    let roster = ctx.roster();
    let class_group = ctx.class_group();

    // Pure, static read; cheap enough to take on every render.
    let students = roster.roster(&class_group);

    let vm = use_signal(WizardVm::new);
    let error = use_signal(|| None::<ViewError>);

    let dispatch = {
        let workflow = workflow.clone();
        use_callback(move |intent: WizardIntent| {
            let mut vm = vm;
            let mut error = error;

            match intent {
                WizardIntent::Submit(info) => {
                    error.set(None);
                    vm.write().submit_setup(info, &students);
                }
                WizardIntent::SetStatus { index, status } => {
                    // Row indices come from the rendered table, so this
                    // only fails if the screen and state disagree.
                    let _ = vm.write().set_status(index, status);
                }
                WizardIntent::Back => {
                    vm.write().back();
                }
                WizardIntent::NewCollection => {
                    error.set(None);
                    vm.write().new_collection();
                }
                WizardIntent::Save => {
                    let workflow = workflow.clone();
                    spawn(async move {
                        vm.write().begin_save();
                        error.set(None);

                        // Take a local copy for the await, then put it back
                        // so the edited table survives a failed save.
                        let mut local = vm.read().clone();
                        let result = local.save(&workflow).await;
                        vm.set(local);

                        if let Err(err) = result {
                            error.set(Some(err));
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WizardTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let current = vm.read().clone();
    let error_value = *error.read();

    let body = match (current.step(), current.session_info().cloned()) {
        (WizardStep::Collect, Some(info)) => rsx! {
            CollectView {
                info,
                class_group: ctx.class_group(),
                rows: current.rows().to_vec(),
                save_state: current.save_state(),
                error: error_value,
                on_intent: dispatch,
            }
        },
        // The state machine never enters the collect step without a
        // submitted setup, so everything else renders step 1.
        (_, initial) => rsx! {
            SetupView {
                initial,
                default_date: workflow.today(),
                on_submit: move |info| dispatch.call(WizardIntent::Submit(info)),
            }
        },
    };

    rsx! {
        div { class: "page wizard-page",
            {body}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WizardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WizardIntent>>>>,
    vm: Rc<RefCell<Option<Signal<WizardVm>>>>,
}

#[cfg(test)]
impl WizardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<WizardIntent>, vm: Signal<WizardVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<WizardIntent> {
        (*self.dispatch.borrow()).expect("wizard dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<WizardVm> {
        (*self.vm.borrow()).expect("wizard vm registered")
    }
}
