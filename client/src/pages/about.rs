//! Static "About" page.

use leptos::prelude::*;

const HIGHLIGHTS: [&str; 5] = [
    "Quality guaranteed toys",
    "Educational value focus",
    "Safe and non-toxic materials",
    "Age-appropriate selections",
    "Expert recommendations",
];

const TEAM: [(&str, &str); 3] = [
    ("Alex Johnson", "CEO & Founder"),
    ("Sarah Chen", "Child Development Expert"),
    ("Mike Rodriguez", "Safety Specialist"),
];

const VALUES: [(&str, &str); 4] = [
    ("Quality", "We only offer toys that meet our strict quality standards."),
    ("Safety", "Child safety is our top priority in every product we offer."),
    ("Innovation", "We constantly seek new and innovative toys for children."),
    ("Care", "We care deeply about children's happiness and development."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="hero">
                <h1>"About ToyTopia"</h1>
                <p>"Where imagination meets reality, and every toy tells a story of joy and wonder."</p>
                <a class="btn btn-accent" href="/">"Explore Our Toys"</a>
            </section>
            <section class="about__mission">
                <h2>"Our Mission"</h2>
                <p>
                    "At ToyTopia, we believe that every child deserves access to high-quality, educational, and fun "
                    "toys that spark creativity and imagination. Our mission is to provide families with carefully "
                    "curated toys that not only entertain but also contribute to a child's development."
                </p>
                <p>
                    "We're committed to making playtime meaningful, safe, and accessible for children of all ages "
                    "and backgrounds."
                </p>
                <h3>"Why Choose ToyTopia?"</h3>
                <ul>{HIGHLIGHTS.iter().map(|item| view! { <li><span class="check">"✓"</span>{*item}</li> }).collect_view()}</ul>
            </section>
            <section class="about__team">
                <h2>"Meet Our Team"</h2>
                <div class="about__grid">
                    {TEAM
                        .iter()
                        .map(|(name, role)| {
                            let initials: String = name.split_whitespace().filter_map(|part| part.chars().next()).collect();
                            view! {
                                <div class="card">
                                    <span class="avatar avatar--large">{initials}</span>
                                    <h3>{*name}</h3>
                                    <p class="card__role">{*role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="about__values">
                <h2>"Our Values"</h2>
                <div class="about__grid">
                    {VALUES
                        .iter()
                        .map(|(title, text)| view! { <div class="card"><h3>{*title}</h3><p>{*text}</p></div> })
                        .collect_view()}
                </div>
            </section>
            <section class="about__contact">
                <h2>"Get in Touch"</h2>
                <p>"Have questions about our toys or need recommendations? We'd love to hear from you!"</p>
                <a class="btn btn-primary" href="/more">"Contact Us"</a>
            </section>
        </div>
    }
}
