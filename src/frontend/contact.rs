use gloo_timers::{callback::Timeout, future::TimeoutFuture};
use portfolio_interactions::analytics::Analytics;
use portfolio_interactions::error::SubmitError;
use portfolio_interactions::form::{
    process_submission, ContactForm, FormSurface, Notice, NoticeBoard, SubmissionOutcome,
    Submitter, SENDING_LABEL, SUBMIT_LABEL,
};
use portfolio_interactions::logging::Logger;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Stand-in for a real endpoint: waits, then always succeeds.
struct SimulatedSubmitter {
    delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[derive(Clone)]
struct ContactSurface {
    submitting: UseStateHandle<bool>,
    notice: UseStateHandle<Option<Notice>>,
    board: Rc<RefCell<NoticeBoard>>,
    dismiss_timer: Rc<RefCell<Option<Timeout>>>,
    dismiss_ms: u32,
    form: NodeRef,
}

impl FormSurface for ContactSurface {
    fn begin_submit(&self) {
        self.submitting.set(true);
    }

    fn end_submit(&self) {
        self.submitting.set(false);
    }

    fn show_notice(&self, notice: Notice) {
        let ticket = self.board.borrow_mut().show(notice.clone());
        self.notice.set(Some(notice));

        let board = self.board.clone();
        let visible = self.notice.clone();
        let timer = Timeout::new(self.dismiss_ms, move || {
            if board.borrow_mut().dismiss(ticket) {
                visible.set(None);
            }
        });

        // Dropping the superseded handle cancels its timer.
        self.dismiss_timer.borrow_mut().replace(timer);
    }

    fn reset_fields(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub logger: Logger,
    pub analytics: Analytics,
    pub submit_delay_ms: u64,
    pub message_dismiss_ms: u64,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let board = use_mut_ref(NoticeBoard::default);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let surface = ContactSurface {
            submitting: submitting.clone(),
            notice: notice.clone(),
            board,
            dismiss_timer,
            dismiss_ms: u32::try_from(props.message_dismiss_ms).unwrap_or(u32::MAX),
            form: form_ref.clone(),
        };
        let fields = (name_ref.clone(), email_ref.clone(), subject_ref.clone(), message_ref.clone());
        let logger = props.logger;
        let analytics = props.analytics;
        let delay_ms = u32::try_from(props.submit_delay_ms).unwrap_or(u32::MAX);

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let form = ContactForm {
                name: input_value(&fields.0),
                email: input_value(&fields.1),
                subject: input_value(&fields.2),
                message: textarea_value(&fields.3),
            };
            let surface = surface.clone();

            spawn_local(async move {
                let submitter = SimulatedSubmitter { delay_ms };
                let outcome = process_submission(&form, &surface, &submitter, &logger).await;
                let label = match outcome {
                    SubmissionOutcome::Invalid(error) => error.field(),
                    SubmissionOutcome::Sent => "sent",
                    SubmissionOutcome::Failed(_) => "failed",
                };
                analytics.track_event("contact", "submit", Some(label));
            });
        })
    };

    html! {
        <section id="contact" class="contact section fade-in">
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                if let Some(current) = (*notice).clone() {
                    <div class={current.kind.class_name()} role="status">{current.text}</div>
                }
                <form class="contact-form" ref={form_ref} onsubmit={onsubmit} novalidate={true}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input type="text" id="name" name="name" ref={name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email" ref={email_ref} />
                    </div>
                    <div class="form-group">
                        <label for="subject">{"Subject"}</label>
                        <input type="text" id="subject" name="subject" ref={subject_ref} />
                    </div>
                    <div class="form-group">
                        <label for="message">{"Message"}</label>
                        <textarea id="message" name="message" rows="5" ref={message_ref}></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        if *submitting {
                            <>
                                <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
                                {" "}{SENDING_LABEL}
                            </>
                        } else {
                            <>{SUBMIT_LABEL}</>
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
