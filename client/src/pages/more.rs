//! "More" page: contact form, quick links, and FAQ.

use leptos::prelude::*;

use crate::components::form::{FormField, SelectField, run_simulated_submit};
use crate::state::forms::{ContactForm, Field, FieldErrors};

const SUBJECTS: &[(&str, &str)] = &[
    ("", "Select a subject"),
    ("general", "General Inquiry"),
    ("product", "Product Question"),
    ("order", "Order Support"),
    ("feedback", "Feedback"),
    ("partnership", "Partnership"),
];

const CONTACT_DETAILS: [(&str, &str); 4] = [
    ("Email", "support@toytopia.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Address", "123 Toy Street, Play City, PC 12345"),
    ("Hours", "Mon-Fri: 9AM-6PM"),
];

const FAQ: [(&str, &str); 3] = [
    (
        "How do I place an order?",
        "Simply browse our toys, click \"Add to Cart\", and proceed to checkout. You'll need to create an account first.",
    ),
    ("What is your return policy?", "We offer a 30-day return policy for unused items in original packaging."),
    ("Do you offer free shipping?", "Yes! Free shipping on orders over $50 within the continental US."),
];

#[component]
pub fn MorePage() -> impl IntoView {
    view! {
        <div class="more">
            <div class="more__header">
                <h1>"More Information"</h1>
                <p>"Find everything you need to know about ToyTopia, from contact information to helpful resources."</p>
            </div>
            <div class="more__grid">
                <ContactCard />
                <div class="more__side">
                    <div class="card">
                        <h3>"Quick Links"</h3>
                        <a class="btn btn-outline" href="/popular-toys">"Popular Toys"</a>
                        <a class="btn btn-outline" href="/about">"About Us"</a>
                        <a class="btn btn-outline" href="/">"Browse All Toys"</a>
                    </div>
                    <div class="card">
                        <h3>"Get in Touch"</h3>
                        {CONTACT_DETAILS
                            .iter()
                            .map(|(label, value)| view! { <div class="contact-line"><p class="label-strong">{*label}</p><p>{*value}</p></div> })
                            .collect_view()}
                    </div>
                    <div class="card">
                        <h3>"Frequently Asked Questions"</h3>
                        {FAQ
                            .iter()
                            .map(|(question, answer)| view! { <details class="faq"><summary>{*question}</summary><p>{*answer}</p></details> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Contact form. Submission is simulated.
#[component]
fn ContactCard() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let success = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let found = form.validate();
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            run_simulated_submit(submitting, success, move || {
                for field in [name, email, subject, message] {
                    field.set(String::new());
                }
            });
        }
    };

    view! {
        <div class="card contact">
            <h2>"Contact Us"</h2>
            <Show when=move || success.get()>
                <div class="alert alert-success">
                    <h3>"Message Sent!"</h3>
                    <p>"We'll get back to you soon."</p>
                </div>
            </Show>
            <form class="contact__form" on:submit=on_submit>
                <FormField
                    label="Your Name"
                    field=Field::Name
                    placeholder="Enter your full name"
                    value=name
                    errors=errors
                />
                <FormField
                    label="Email Address"
                    field=Field::Email
                    input_type="email"
                    placeholder="Enter your email"
                    value=email
                    errors=errors
                />
                <SelectField label="Subject" field=Field::Subject options=SUBJECTS value=subject errors=errors />
                <FormField
                    label="Message"
                    field=Field::Message
                    placeholder="Tell us how we can help you..."
                    multiline=true
                    value=message
                    errors=errors
                />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
