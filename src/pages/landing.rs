use chrono::Datelike;
use yew::prelude::*;

use crate::components::book_request::{BookRequestForm, BENEFIT_KEYS};
use crate::components::contact_form::ContactForm;
use crate::components::count_up::CountUpNumber;
use crate::components::header::{scroll_to_section, Header};
use crate::components::language::use_i18n;
use crate::components::newsletter::NewsletterForm;
use crate::components::scroll_reveal::{ScrollReveal, StaggerReveal};
use crate::reveal::{Direction, Visibility};

fn scroll_button(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(id))
}

#[function_component(Hero)]
fn hero() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="hero" class="hero">
            <ScrollReveal direction={Direction::Blur} threshold={0.1}>
                <h1>{ i18n.t("heroTitle") }</h1>
            </ScrollReveal>
            <ScrollReveal delay={150}>
                <p class="hero-subtitle">
                    { i18n.t("heroSubtitle") }{" "}
                    <strong>{ i18n.t("heroBooks") }</strong>{" "}
                    { i18n.t("heroSubtitleEnd") }
                </p>
            </ScrollReveal>
            <ScrollReveal delay={300} direction={Direction::Scale}>
                <div class="hero-buttons">
                    <button class="primary-button" onclick={scroll_button("get-involved")}>
                        { i18n.t("makeADonation") }
                    </button>
                    <button class="secondary-button" onclick={scroll_button("founder-story")}>
                        { i18n.t("discoverMore") }
                    </button>
                </div>
                <p class="hero-trust">{ "55,000+ " }{ i18n.t("booksDistributed") }</p>
            </ScrollReveal>
        </section>
    }
}

#[function_component(FounderStory)]
fn founder_story() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="founder-story" class="section">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("ourStoryLabel") }</span>
                <h2>
                    { i18n.t("founderTitle") }{" "}
                    <span class="highlight">{ i18n.t("founderTitleHighlight") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("founderSubtitle") }</p>
            </ScrollReveal>
            <div class="split">
                <ScrollReveal direction={Direction::Right} class="story-card">
                    <span class="story-since">{ i18n.t("since") }{" 2019"}</span>
                    <h3>{ i18n.t("whereItAllBegan") }</h3>
                </ScrollReveal>
                <ScrollReveal direction={Direction::Left} delay={150}>
                    <h3>{ i18n.t("fromClassroomToNationwide") }</h3>
                    <p>{ i18n.t("founderBio") }</p>
                    <button class="secondary-button" onclick={scroll_button("mission")}>
                        { i18n.t("discoverOurMission") }
                    </button>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(Mission)]
fn mission() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="mission" class="section tinted">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("ourMission") }</span>
                <h2>
                    { i18n.t("missionTitle") }{" "}
                    <span class="highlight">{ i18n.t("missionTitleHighlight") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("missionBody") }</p>
            </ScrollReveal>
        </section>
    }
}

#[function_component(Impact)]
fn impact() -> Html {
    let i18n = use_i18n();
    let counting = use_state(|| false);

    let on_change = {
        let counting = counting.clone();
        Callback::from(move |visibility: Visibility| {
            if visibility.is_visible() {
                counting.set(true);
            }
        })
    };

    let stats: [(u64, &'static str, &'static str); 3] = [
        (55_000, "+", "booksLabel"),
        (50, "", "statesReached"),
        (20_000, "+", "childrenHelped"),
    ];

    html! {
        <section id="impact" class="section impact">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("ourImpact") }</span>
                <h2>
                    { i18n.t("makingADifference") }{" "}
                    <span class="highlight">{ i18n.t("realDifference") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("impactSubtitle") }</p>
            </ScrollReveal>
            <ScrollReveal delay={100}>
                <h3 class="impact-heading">{ i18n.t("yourDonationAtWork") }</h3>
            </ScrollReveal>
            <ScrollReveal class="stats" direction={Direction::Scale} on_change={on_change}>
                {
                    for stats.iter().map(|&(target, suffix, label)| html! {
                        <div class="stat">
                            <div class="stat-number">
                                <CountUpNumber target={target} suffix={suffix} start={*counting} />
                            </div>
                            <div class="stat-label">{ i18n.t(label) }</div>
                        </div>
                    })
                }
            </ScrollReveal>
            <ScrollReveal delay={200}>
                <p class="impact-note">
                    { i18n.t("nationwideReach") }{" · "}{ i18n.t("volunteerRun") }
                </p>
            </ScrollReveal>
        </section>
    }
}

#[function_component(Programs)]
fn programs() -> Html {
    let i18n = use_i18n();
    let programs = [
        ("programBookDrives", "programBookDrivesBody"),
        ("programSchools", "programSchoolsBody"),
        ("programEvents", "programEventsBody"),
    ];

    html! {
        <section id="programs" class="section tinted">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("ourPrograms") }</span>
                <h2>
                    { i18n.t("howWeSpreadJoy") }{" "}
                    <span class="highlight">{ i18n.t("spreadTheJoy") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("programsSubtitle") }</p>
            </ScrollReveal>
            <StaggerReveal class="card-grid" item_class="card-slot" stagger={120}>
                {
                    for programs.iter().map(|&(title, body)| html! {
                        <div class="card">
                            <h3>{ i18n.t(title) }</h3>
                            <p>{ i18n.t(body) }</p>
                        </div>
                    })
                }
            </StaggerReveal>
            <ScrollReveal class="request-books" direction={Direction::Up} delay={100}>
                <span class="section-label">{ i18n.t("specialInitiatives") }</span>
                <p>{ i18n.t("needBooksForSchool") }</p>
                <button class="secondary-button" onclick={scroll_button("book-request")}>
                    { i18n.t("requestBooks") }
                </button>
            </ScrollReveal>
        </section>
    }
}

#[function_component(BookRequest)]
fn book_request() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="book-request" class="section">
            <div class="split">
                <ScrollReveal direction={Direction::Right}>
                    <span class="section-label">{ i18n.t("requestBooksTitle") }</span>
                    <h2>
                        { i18n.t("needBooksForEvent") }{" "}
                        <span class="highlight">{ i18n.t("eventOrProgram") }</span>
                    </h2>
                    <p>{ i18n.t("bookRequestIntro") }</p>
                    <ul class="benefits">
                        { for BENEFIT_KEYS.iter().map(|&key| html! { <li>{ i18n.t(key) }</li> }) }
                    </ul>
                    <p class="request-note">
                        <strong>{ i18n.t("note") }</strong>{" "}{ i18n.t("bookAvailabilityNote") }
                    </p>
                </ScrollReveal>
                <ScrollReveal direction={Direction::Left} delay={150}>
                    <BookRequestForm />
                </ScrollReveal>
            </div>
        </section>
    }
}

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("testimonialParentQuote", "Sarah Martinez", "testimonialParentRole"),
    ("testimonialTeacherQuote", "Michael Chen", "testimonialTeacherRole"),
    ("testimonialVolunteerQuote", "Emily Johnson", "testimonialVolunteerRole"),
];

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="testimonials" class="section tinted">
            <ScrollReveal>
                <h2>
                    { i18n.t("testimonialsTitle") }{" "}
                    <span class="highlight">{ i18n.t("testimonialsHighlight") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("testimonialsSubtitle") }</p>
            </ScrollReveal>
            <StaggerReveal class="card-grid" item_class="card-slot" stagger={150}>
                {
                    for TESTIMONIALS.iter().map(|&(quote, author, role)| html! {
                        <figure class="card testimonial">
                            <blockquote>{ format!("\u{201c}{}\u{201d}", i18n.t(quote)) }</blockquote>
                            <figcaption>
                                <strong>{ author }</strong>
                                <span>{ i18n.t(role) }</span>
                            </figcaption>
                        </figure>
                    })
                }
            </StaggerReveal>
        </section>
    }
}

#[function_component(GetInvolved)]
fn get_involved() -> Html {
    let i18n = use_i18n();
    let ways = ["donateOnline", "mailACheck", "donateBooks", "volunteer"];

    html! {
        <section id="get-involved" class="section">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("getInvolved") }</span>
                <h2>
                    { i18n.t("getInvolvedTitle") }{" "}
                    <span class="highlight">{ i18n.t("giftOfReading") }</span>
                </h2>
                <p class="section-subtitle">{ i18n.t("getInvolvedSubtitle") }</p>
            </ScrollReveal>
            <StaggerReveal class="card-grid four" item_class="card-slot" direction={Direction::Scale}>
                {
                    for ways.iter().map(|&key| html! {
                        <div class="card way">
                            <h3>{ i18n.t(key) }</h3>
                        </div>
                    })
                }
            </StaggerReveal>
            <ScrollReveal class="cta" delay={150}>
                <h3>{ i18n.t("readyToMakeImpact") }</h3>
                <p>{ i18n.t("shareOurMission") }</p>
                <button class="primary-button" onclick={scroll_button("contact")}>
                    { i18n.t("joinOurMission") }
                </button>
            </ScrollReveal>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="contact" class="section tinted">
            <ScrollReveal>
                <span class="section-label">{ i18n.t("contactUs") }</span>
            </ScrollReveal>
            <ScrollReveal direction={Direction::Up} delay={100}>
                <ContactForm />
            </ScrollReveal>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let i18n = use_i18n();
    let year = chrono::Local::now().year();

    let explore = [
        ("mission", "mission"),
        ("programs", "programs"),
        ("impact", "impact"),
        ("get-involved", "getInvolved"),
    ];
    let support = [
        ("get-involved", "donateNow"),
        ("book-request", "requestBooks"),
        ("contact", "sendUsAMessage"),
    ];
    let links = |items: &[(&'static str, &'static str)]| -> Html {
        items
            .iter()
            .map(|&(id, key)| html! {
                <li><button class="footer-link" onclick={scroll_button(id)}>{ i18n.t(key) }</button></li>
            })
            .collect()
    };

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <span class="nav-logo">{"Bright Beginnings Books"}</span>
                    <p>{ i18n.t("footerTagline") }</p>
                    <p>{"info@brightbeginningsbooks.org"}</p>
                </div>
                <div>
                    <h4>{ i18n.t("explore") }</h4>
                    <ul class="footer-links">{ links(&explore[..]) }</ul>
                </div>
                <div>
                    <h4>{ i18n.t("support") }</h4>
                    <ul class="footer-links">{ links(&support[..]) }</ul>
                </div>
                <NewsletterForm />
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} Bright Beginnings Books. {}", year, i18n.t("allRightsReserved")) }</span>
                <span>{ i18n.t("nonprofit") }</span>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <Header />
            <main>
                <Hero />
                <FounderStory />
                <Mission />
                <Impact />
                <Programs />
                <BookRequest />
                <Testimonials />
                <GetInvolved />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #2d2a26;
        background: #fffdf8;
    }
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.85);
        backdrop-filter: blur(10px);
        transition: box-shadow 0.3s ease;
    }
    .site-header.scrolled {
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
    }
    .scroll-progress {
        height: 3px;
        background: transparent;
    }
    .scroll-progress-fill {
        height: 100%;
        background: linear-gradient(90deg, #f97316, #ec4899);
        transform-origin: left;
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 64px;
        padding: 0 1.5rem;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.2rem;
        color: #2d2a26;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        color: #57534e;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #f97316;
    }
    .nav-donate, .primary-button {
        background: #f97316;
        color: white;
        border: none;
        border-radius: 999px;
        padding: 0.6rem 1.4rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .secondary-button {
        background: white;
        color: #f97316;
        border: 2px solid #f97316;
        border-radius: 999px;
        padding: 0.6rem 1.4rem;
        font-weight: 600;
        cursor: pointer;
    }
    .language-toggle {
        display: flex;
        gap: 0.3rem;
        border: none;
        border-radius: 999px;
        background: #f5f5f4;
        padding: 0.4rem 0.8rem;
        cursor: pointer;
    }
    .lang-option {
        color: #a8a29e;
    }
    .lang-option.active {
        color: #f97316;
        font-weight: 700;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        display: block;
        width: 22px;
        height: 2px;
        margin: 5px 0;
        background: #2d2a26;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: 6rem 1.5rem 3rem;
        background: linear-gradient(135deg, #fff7ed, #fffdf8, #fdf2f8);
    }
    .hero h1 {
        font-size: clamp(2.4rem, 5vw, 4rem);
        max-width: 900px;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        max-width: 700px;
        color: #57534e;
    }
    .hero-buttons {
        display: flex;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .section {
        padding: 6rem 1.5rem;
        max-width: 1200px;
        margin: 0 auto;
        text-align: center;
    }
    .section.tinted {
        max-width: none;
        background: #fafaf9;
    }
    .section-label {
        display: inline-block;
        padding: 0.4rem 1rem;
        border-radius: 999px;
        background: white;
        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.05);
        font-size: 0.85rem;
        font-weight: 600;
    }
    .section-subtitle {
        max-width: 680px;
        margin: 0 auto 2.5rem;
        color: #57534e;
        font-size: 1.1rem;
    }
    .highlight {
        background: linear-gradient(90deg, #f97316, #ec4899);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .split {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        text-align: left;
        align-items: center;
    }
    .story-card {
        background: white;
        border-radius: 24px;
        padding: 2.5rem;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.08);
    }
    .impact {
        max-width: none;
        color: white;
        background: linear-gradient(135deg, #f97316, #ec4899);
    }
    .impact .section-subtitle, .impact-note {
        color: rgba(255, 255, 255, 0.85);
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 900px;
        margin: 0 auto 2rem;
    }
    .stat-number {
        font-size: 3rem;
        font-weight: 800;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        max-width: 1100px;
        margin: 0 auto 2rem;
    }
    .card-grid.four {
        grid-template-columns: repeat(4, 1fr);
    }
    .card {
        height: 100%;
        background: white;
        border-radius: 20px;
        padding: 2rem;
        box-shadow: 0 10px 24px rgba(0, 0, 0, 0.06);
    }
    .contact-card {
        max-width: 560px;
        margin: 2rem auto 0;
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
        text-align: left;
        background: white;
        border-radius: 24px;
        padding: 2rem;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.06);
    }
    .contact-card input, .contact-card textarea {
        padding: 0.75rem 1rem;
        border: 1px solid #e7e5e4;
        border-radius: 12px;
        background: #fafaf9;
        font: inherit;
    }
    .contact-card.sent {
        text-align: center;
    }
    .hero-trust {
        margin-top: 1.5rem;
        font-weight: 600;
        color: #f97316;
    }
    .impact-heading {
        margin-bottom: 2rem;
    }
    .request-books .section-label {
        margin-bottom: 0.75rem;
    }
    .benefits {
        list-style: none;
        padding: 0;
    }
    .benefits li::before {
        content: "\2713  ";
        color: #16a34a;
        font-weight: 700;
    }
    .request-note {
        padding: 1rem 1.25rem;
        border-radius: 16px;
        background: #fef9c3;
    }
    .request-card {
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
        text-align: left;
        background: #fafaf9;
        border-radius: 24px;
        padding: 2rem;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.06);
    }
    .request-card input, .request-card textarea {
        padding: 0.75rem 1rem;
        border: 1px solid #e7e5e4;
        border-radius: 12px;
        background: white;
        font: inherit;
    }
    .request-card.sent {
        text-align: center;
    }
    .field-label {
        font-weight: 600;
    }
    .field-pair {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .field-pair > div {
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
    }
    .org-types {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
    }
    .org-type {
        padding: 0.9rem;
        border: 2px solid #e7e5e4;
        border-radius: 12px;
        background: white;
        font: inherit;
        cursor: pointer;
    }
    .org-type.selected {
        border-color: #f97316;
        color: #f97316;
    }
    .testimonial {
        margin: 0;
        text-align: left;
    }
    .testimonial blockquote {
        margin: 0 0 1.5rem;
        font-style: italic;
        color: #44403c;
    }
    .testimonial figcaption {
        display: flex;
        flex-direction: column;
    }
    .testimonial figcaption span {
        font-size: 0.85rem;
        color: #78716c;
    }
    .footer-columns {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 2fr;
        gap: 2rem;
        max-width: 1200px;
        margin: 0 auto;
        text-align: left;
    }
    .footer-brand .nav-logo {
        color: white;
    }
    .footer-links {
        list-style: none;
        padding: 0;
    }
    .footer-link {
        background: none;
        border: none;
        padding: 0.2rem 0;
        color: #a8a29e;
        font: inherit;
        cursor: pointer;
    }
    .footer-link:hover {
        color: white;
    }
    .newsletter-form {
        display: flex;
        gap: 0.5rem;
    }
    .newsletter-form input {
        flex: 1;
        padding: 0.6rem 1rem;
        border: none;
        border-radius: 999px;
        font: inherit;
    }
    .newsletter-thanks {
        color: #fdba74;
        font-weight: 600;
    }
    .site-footer {
        background: #1c1917;
        color: #d6d3d1;
        padding: 3rem 1.5rem;
        text-align: center;
    }
    .footer-bottom {
        display: flex;
        justify-content: space-between;
        max-width: 1200px;
        margin: 2rem auto 0;
        font-size: 0.85rem;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
            position: absolute;
            top: 64px;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 1rem;
            background: white;
        }
        .nav-links.open {
            display: flex;
        }
        .split, .stats, .card-grid, .card-grid.four, .field-pair, .footer-columns {
            grid-template-columns: 1fr;
        }
        .footer-bottom {
            flex-direction: column;
            gap: 0.5rem;
        }
    }
"#;
