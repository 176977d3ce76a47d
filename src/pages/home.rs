use yew::prelude::*;
use yew_router::components::Link;

use crate::hooks::use_page_motion;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_page_motion();

    html! {
        <div class="home-page">
            <section class="hero-section">
                <div class="hero-content">
                    <h1 class="hero-title">{"E-Cell"}</h1>
                    <p class="hero-subtitle">{"Where student ideas turn into companies."}</p>
                    <div class="hero-actions">
                        <button id="ctaButton" class="cta-button">{"Join the cell"}</button>
                        <a href="#programs" class="hero-link">{"See what we run"}</a>
                    </div>
                </div>
            </section>

            <section id="programs" class="programs-section">
                <h2 data-aos="fade-up">{"Programs"}</h2>
                <div class="card-grid">
                    <div class="card" data-aos="fade-up">
                        <h3>{"Ideation Bootcamp"}</h3>
                        <p>{"Two weekends to go from a problem you care about to a pitch you can defend."}</p>
                    </div>
                    <div class="card" data-aos="fade-up">
                        <h3>{"Founder Office Hours"}</h3>
                        <p>{"Weekly slots with alumni founders for the questions nobody answers in class."}</p>
                    </div>
                    <div class="card" data-aos="fade-up">
                        <h3>{"Demo Day"}</h3>
                        <p>{"A room full of investors, mentors and the people who will be your first users."}</p>
                    </div>
                </div>
            </section>

            <section id="impact" class="stats-section">
                <h2 data-aos="fade-up">{"Impact so far"}</h2>
                <div class="stats-grid">
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="120">{"120"}</span>
                        <span class="stat-label">{"Startups incubated"}</span>
                    </div>
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="35">{"35"}</span>
                        <span class="stat-label">{"Funded teams"}</span>
                    </div>
                    <div class="stat" data-aos="fade-up">
                        <span class="stat-value" data-counter="2500">{"2500"}</span>
                        <span class="stat-label">{"Members"}</span>
                    </div>
                </div>
            </section>

            <footer class="page-footer">
                <a href="#programs">{"Programs"}</a>
                <a href="#impact">{"Impact"}</a>
                <Link<Route> to={Route::About}>{"About us"}</Link<Route>>
            </footer>

            <style>
                {r#"
                .home-page {
                    color: #f8fafc;
                    background: #0f172a;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .hero-section {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 24px;
                    will-change: transform;
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 6rem);
                    margin: 0 0 16px;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                }
                .hero-actions {
                    display: flex;
                    gap: 24px;
                    justify-content: center;
                    align-items: center;
                    margin-top: 32px;
                }
                .cta-button {
                    padding: 14px 32px;
                    border: none;
                    border-radius: 999px;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    transition: transform 0.1s ease, background 0.3s ease;
                }
                .hero-link {
                    color: #93c5fd;
                }
                .programs-section, .stats-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 96px 24px;
                }
                .card-grid, .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 24px;
                }
                .card {
                    padding: 32px;
                    border-radius: 16px;
                    background: rgba(30, 41, 59, 0.8);
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                }
                .stat {
                    text-align: center;
                }
                .stat-value {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #a78bfa;
                }
                .stat-label {
                    color: #94a3b8;
                }
                .page-footer {
                    display: flex;
                    gap: 24px;
                    justify-content: center;
                    padding: 48px 24px;
                    border-top: 1px solid rgba(148, 163, 184, 0.2);
                }
                .page-footer a {
                    color: #cbd5e1;
                }
                "#}
            </style>
        </div>
    }
}
