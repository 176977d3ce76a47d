use yew::prelude::*;
use yew_router::components::Link;

use crate::hooks::use_page_motion;
use crate::Route;

struct Activity {
    title: &'static str,
    body: &'static str,
}

const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Speaker Sessions",
        body: "Founders and operators talk through what actually happened, not the press release.",
    },
    Activity {
        title: "Hackathons",
        body: "Forty-eight hours, a real problem statement and mentors walking the floor.",
    },
    Activity {
        title: "Startup Internships",
        body: "We match members with early-stage teams that need hands more than titles.",
    },
    Activity {
        title: "Pitch Clinics",
        body: "Rehearse in front of people who will interrupt you the way investors do.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    use_page_motion();

    html! {
        <div class="about-page">
            <section class="hero-section">
                <div class="hero-content">
                    <h1 class="hero-title">{"About Us"}</h1>
                    <p class="hero-subtitle">{"A student-run cell for people who would rather build than wait."}</p>
                    <a href="#mission" class="hero-link">{"Our mission"}</a>
                </div>
            </section>

            <section id="mission" class="about-section">
                <h2 data-aos="fade-up">{"Mission"}</h2>
                <p data-aos="fade-up">
                    {"We give students the room, the people and the deadlines to try starting something while the cost of failing is still low."}
                </p>
            </section>

            <section id="activities" class="about-section">
                <h2 data-aos="fade-up">{"What we do"}</h2>
                <div class="activity-grid">
                    { for ACTIVITIES.iter().map(|activity| html! {
                        <div class="activity-card" data-aos="fade-up">
                            <h3>{activity.title}</h3>
                            <p>{activity.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="numbers" class="about-section">
                <h2 data-aos="fade-up">{"In numbers"}</h2>
                <div class="stats-grid">
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="8">{"8"}</span>
                        <span class="stat-label">{"Years running"}</span>
                    </div>
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="60">{"60"}</span>
                        <span class="stat-label">{"Events a year"}</span>
                    </div>
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="45">{"45"}</span>
                        <span class="stat-label">{"Mentors"}</span>
                    </div>
                </div>
            </section>

            <footer class="page-footer">
                <a href="#mission">{"Mission"}</a>
                <a href="#activities">{"Activities"}</a>
                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            </footer>

            <style>
                {r#"
                .about-page {
                    color: #f8fafc;
                    background: #111827;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .about-page .hero-section {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 24px;
                }
                .about-page .hero-title {
                    font-size: clamp(2.5rem, 7vw, 5rem);
                    margin: 0 0 16px;
                }
                .about-page .hero-subtitle {
                    color: #d1d5db;
                    font-size: 1.2rem;
                }
                .about-page .hero-link {
                    color: #93c5fd;
                }
                .about-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 80px 24px;
                }
                .activity-grid, .about-page .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 24px;
                }
                .activity-card {
                    padding: 28px;
                    border-radius: 14px;
                    background: rgba(31, 41, 55, 0.85);
                    border: 1px solid rgba(156, 163, 175, 0.2);
                }
                .about-page .stat {
                    text-align: center;
                }
                .about-page .stat-value {
                    display: block;
                    font-size: 2.75rem;
                    font-weight: 700;
                    color: #60a5fa;
                }
                .about-page .stat-label {
                    color: #9ca3af;
                }
                .about-page .page-footer {
                    display: flex;
                    gap: 24px;
                    justify-content: center;
                    padding: 48px 24px;
                }
                .about-page .page-footer a {
                    color: #d1d5db;
                }
                "#}
            </style>
        </div>
    }
}
