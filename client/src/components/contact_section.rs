//! Contact form, contact details, and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a `RwSignal<ContactForm>`. Each press of "Send Message"
//! snapshots the current values and runs [`submit`] against the server
//! relay; only a successful delivery clears the live form. Presses are not
//! de-duplicated, so two quick clicks send twice.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::components::toaster::notify;
use crate::content::Icon;
use crate::content::profile::{CONTACT_INFO, QUICK_ACTIONS, QuickActionKind};
use crate::net::contact::RelayTransport;
use crate::state::contact::{ContactField, ContactForm, SubmitOutcome, submit};
use crate::state::toast::ToastState;
use crate::state::visibility::reveal_class;
use crate::util::reveal::use_reveal;

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let label = if field.is_required() { format!("{label} *") } else { label.to_owned() };
    view! {
        <div>
            <label class="label" for=field.name()>{label}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                class="input"
                placeholder=placeholder
                required=field.is_required()
                prop:value=move || form.with(|f| f.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ContactForm::default());

    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            let mut draft = form.get_untracked();
            let outcome = submit(&mut draft, &RelayTransport).await;
            match &outcome {
                SubmitOutcome::Sent => {
                    form.try_update(ContactForm::clear);
                }
                SubmitOutcome::Failed(err) => {
                    #[cfg(feature = "hydrate")]
                    log::error!("contact delivery failed: {err}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = err;
                }
                SubmitOutcome::Invalid(_) => {}
            }
            notify(toasts, outcome.notice());
        });
    };

    view! {
        <section id="contact" class="py-20 bg-secondary/20" node_ref=section_ref>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader
                        title="Let's Connect"
                        subtitle="Ready to collaborate on innovative projects or discuss opportunities? Let's build something amazing together."
                    />

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="card p-8">
                            <h3 class="text-2xl font-bold mb-6 gradient-text">"Send a Message"</h3>

                            <form class="space-y-6" on:submit=on_submit>
                                <div class="grid md:grid-cols-2 gap-4">
                                    <FormField form=form field=ContactField::Name label="Name" placeholder="Your name"/>
                                    <FormField
                                        form=form
                                        field=ContactField::Email
                                        label="Email"
                                        placeholder="your@email.com"
                                        input_type="email"
                                    />
                                </div>

                                <FormField
                                    form=form
                                    field=ContactField::Subject
                                    label="Subject"
                                    placeholder="What's this about?"
                                />

                                <div>
                                    <label class="label" for="message">"Message *"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        class="textarea"
                                        placeholder="Tell me about your project or idea..."
                                        required=true
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.set(ContactField::Message, event_target_value(&ev)));
                                        }
                                    ></textarea>
                                </div>

                                <button type="submit" class="btn btn-primary btn-lg w-full">
                                    <IconMark icon=Icon::Send size="w-4 h-4 mr-2"/>
                                    "Send Message"
                                </button>
                            </form>
                        </div>

                        <div class="space-y-8">
                            <div class="card p-6">
                                <h3 class="text-xl font-bold mb-6 text-accent">"Get in Touch"</h3>
                                <div class="space-y-4">
                                    {CONTACT_INFO
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class="flex items-center space-x-3">
                                                    <IconMark icon=item.icon size="w-5 h-5"/>
                                                    <div>
                                                        <p class="text-sm text-muted-foreground">{item.label}</p>
                                                        <a
                                                            href=item.href
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="hover:text-primary"
                                                        >
                                                            {item.value}
                                                        </a>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="card p-6">
                                <h3 class="text-xl font-bold mb-6 text-accent">"Quick Actions"</h3>
                                {QUICK_ACTIONS
                                    .iter()
                                    .map(|action| {
                                        let download = action.kind == QuickActionKind::Download;
                                        view! {
                                            <a
                                                href=action.href
                                                download=download.then_some("")
                                                target=(!download).then_some("_blank")
                                                rel=(!download).then_some("noopener noreferrer")
                                            >
                                                <button class="btn btn-outline w-full justify-start mb-3">
                                                    <IconMark icon=action.icon size="w-4 h-4 mr-3"/>
                                                    {action.label}
                                                </button>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
