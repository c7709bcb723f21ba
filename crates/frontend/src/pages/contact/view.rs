use super::flow::NoticeKind;
use super::view_model::ContactViewModel;
use crate::layout::set_page_title;
use crate::shared::components::ui::{Button, Card, Checkbox, Input, LinkButton, Textarea};
use crate::shared::components::{Section, SectionBackground, SectionHeading, SectionSize};
use crate::shared::icons::icon;
use contracts::contact::ContactField;
use contracts::content::get_site_config;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

const BOOKING_URL: &str = "https://calendly.com/aisommelier/discovery";

#[component]
fn NoticeBar(vm: ContactViewModel) -> impl IntoView {
    move || {
        vm.notice().map(|notice| {
            let intent = match notice.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Failure => MessageBarIntent::Error,
            };
            view! {
                <div class="contact-notice">
                    <MessageBar intent=intent>
                        <div>
                            <strong>{notice.title}</strong>
                            " "
                            <span>{notice.description}</span>
                        </div>
                    </MessageBar>
                </div>
            }
        })
    }
}

#[component]
fn ContactForm(vm: ContactViewModel) -> impl IntoView {
    let text_field = move |field: ContactField| {
        (
            Signal::derive(move || vm.field_value(field)),
            Callback::new(move |value: String| vm.set_field(field, value)),
            Signal::derive(move || vm.error_for(field)),
        )
    };
    let (name, on_name, name_error) = text_field(ContactField::Name);
    let (email, on_email, email_error) = text_field(ContactField::Email);
    let (company, on_company, company_error) = text_field(ContactField::Company);
    let (role, on_role, _) = text_field(ContactField::Role);
    let (message, on_message, message_error) = text_field(ContactField::Message);

    let consent = Signal::derive(move || vm.form.with(|f| f.consent));
    let consent_error = Signal::derive(move || vm.error_for(ContactField::Consent));
    let busy = Signal::derive(move || Some(vm.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <Card class="contact-form">
            <h2 class="contact-form__title">"Send Us a Message"</h2>
            <p class="contact-form__lead">
                "Fill out the form below and we'll get back to you within 24 hours."
            </p>

            <form class="form" novalidate=true on:submit=on_submit>
                <div class="form__row">
                    <Input
                        id="name"
                        label="Name *"
                        value=name
                        on_input=on_name
                        error=name_error
                        disabled=busy
                        required=true
                        autocomplete="name"
                    />
                    <Input
                        id="email"
                        label="Email *"
                        input_type="email"
                        value=email
                        on_input=on_email
                        error=email_error
                        disabled=busy
                        required=true
                        autocomplete="email"
                    />
                </div>
                <div class="form__row">
                    <Input
                        id="company"
                        label="Winery/Company *"
                        value=company
                        on_input=on_company
                        error=company_error
                        disabled=busy
                        required=true
                        autocomplete="organization"
                    />
                    <Input
                        id="role"
                        label="Your Role"
                        placeholder="e.g., Winemaker, Owner, Operations Manager"
                        value=role
                        on_input=on_role
                        disabled=busy
                    />
                </div>
                <Textarea
                    id="message"
                    label="How can we help? *"
                    placeholder="Tell us about your challenges, goals, or questions about AI for your winery..."
                    rows=5
                    value=message
                    on_input=on_message
                    error=message_error
                    disabled=busy
                    required=true
                />
                <Checkbox
                    id="consent"
                    label="I agree to receive communications from AI Sommelier regarding my inquiry. You can unsubscribe at any time."
                    checked=consent
                    on_change=Callback::new(move |checked| vm.set_consent(checked))
                    error=consent_error
                    disabled=busy
                />

                <NoticeBar vm=vm />

                <Button button_type="submit" class="button--block" disabled=busy>
                    {move || {
                        if vm.is_submitting() {
                            view! {
                                <Spinner size=SpinnerSize::Tiny />
                                <span>"Sending..."</span>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Send Message"</span> }.into_any()
                        }
                    }}
                </Button>
            </form>
        </Card>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let contact = &get_site_config().contact;

    view! {
        <div class="contact-aside">
            <Card class="contact-card">
                <h3 class="contact-card__title">"Get in Touch Directly"</h3>
                <p class="contact-card__lead">
                    "Prefer to reach out directly? Here are other ways to connect."
                </p>
                <div class="contact-card__item">
                    <div class="contact-card__icon">{icon("mail")}</div>
                    <div>
                        <div class="contact-card__label">"Email"</div>
                        <a href=contact.mailto()>{contact.email.clone()}</a>
                    </div>
                </div>
                <div class="contact-card__item">
                    <div class="contact-card__icon">{icon("phone")}</div>
                    <div>
                        <div class="contact-card__label">"Phone"</div>
                        <a href=contact.tel()>{contact.phone.clone()}</a>
                    </div>
                </div>
                <div class="contact-card__item">
                    <div class="contact-card__icon">{icon("map-pin")}</div>
                    <div>
                        <div class="contact-card__label">"Location"</div>
                        <div>{contact.address.clone()}</div>
                    </div>
                </div>
            </Card>

            <Card class="contact-card">
                <h3 class="contact-card__title">"Book a Discovery Call"</h3>
                <p class="contact-card__lead">
                    "Schedule a 30-minute conversation to discuss your AI goals."
                </p>
                <LinkButton href=BOOKING_URL class="button--block" external=true>
                    "Schedule Discovery Call"
                </LinkButton>
                <p class="contact-card__note">"No commitment required • Free consultation"</p>
            </Card>

            <Card class="response-time">
                <div class="response-time__value">"24 Hours"</div>
                <div class="response-time__label">"Average Response Time"</div>
                <p class="response-time__note">
                    "We respond to all inquiries within one business day, usually much sooner."
                </p>
            </Card>
        </div>
    }
}

#[component]
fn ThankYou(vm: ContactViewModel) -> impl IntoView {
    let reference = move || vm.flow.with(|f| f.receipt().map(|r| r.reference.clone()));

    view! {
        <Section size=SectionSize::Xl>
            <div class="thank-you">
                <NoticeBar vm=vm />
                <div class="thank-you__icon">{icon("check-circle")}</div>
                <h1 class="thank-you__title">"Thank You!"</h1>
                <p class="thank-you__text">
                    "Your message has been sent successfully. We'll get back to you within 24 hours to discuss how AI can transform your winery operations."
                </p>
                {move || {
                    reference()
                        .map(|r| view! { <p class="thank-you__reference">{format!("Reference: {}", r)}</p> })
                }}
                <div class="thank-you__actions">
                    <LinkButton href="/">"Return to Home"</LinkButton>
                    <Button variant="ghost" on_click=Callback::new(move |_| vm.reset_command())>
                        "Send another message"
                    </Button>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    set_page_title(Some("Contact"));
    let vm = ContactViewModel::new();

    view! {
        <Show
            when=move || !vm.is_submitted()
            fallback=move || view! { <ThankYou vm=vm /> }
        >
            <Section size=SectionSize::Lg>
                <SectionHeading
                    title="Let's Discuss Your AI Journey"
                    subtitle="Ready to explore how AI can transform your winery? Let's start with a conversation about your specific needs and goals."
                />
            </Section>

            <Section size=SectionSize::Xl background=SectionBackground::Muted>
                <div class="grid grid--2">
                    <ContactForm vm=vm />
                    <ContactDetails />
                </div>
            </Section>
        </Show>
    }
}
