use leptos::prelude::*;

use crate::content::{SkillCard, SITE_NAME, SKILL_CARDS};
use crate::theme::ThemeContext;

use super::icons::Icon;

#[component]
pub fn About() -> impl IntoView {
    let theme = ThemeContext::expect();

    view! {
        <section
            id="about"
            class=move || {
                theme
                    .pick(
                        "py-20 relative overflow-hidden bg-gray-900",
                        "py-20 relative overflow-hidden bg-gray-50",
                    )
            }
        >
            // Background glow
            <div class=move || theme.pick("absolute inset-0 opacity-5", "absolute inset-0 opacity-[0.03]")>
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        theme
                            .pick(
                                "text-4xl md:text-5xl font-bold mb-6 text-white",
                                "text-4xl md:text-5xl font-bold mb-6 text-gray-900",
                            )
                    }>
                        "About "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            "Me"
                        </span>
                    </h2>
                    <div class="max-w-4xl mx-auto">
                        <p class=move || {
                            theme
                                .pick(
                                    "text-xl leading-relaxed mb-8 text-gray-300",
                                    "text-xl leading-relaxed mb-8 text-gray-600",
                                )
                        }>
                            "Hi, I'm "
                            <span class=move || {
                                theme.pick("font-semibold text-blue-400", "font-semibold text-blue-600")
                            }>{SITE_NAME}</span>
                            " — a software engineer specializing in full-stack web development, AI-powered applications, and automated testing. I build scalable web apps and intelligent assistants using the MERN stack, OpenAI API, and LLMs, with end-to-end testing powered by Cypress and Playwright."
                        </p>

                        <div class=move || {
                            theme
                                .pick(
                                    "inline-flex items-center gap-4 px-6 py-3 rounded-full border bg-gradient-to-r from-blue-500/20 to-purple-500/20 border-blue-500/30",
                                    "inline-flex items-center gap-4 px-6 py-3 rounded-full border bg-gradient-to-r from-blue-100 to-purple-100 border-blue-300/50",
                                )
                        }>
                            <span class=move || theme.pick("text-blue-400", "text-blue-600")>
                                <Icon name="brain" class="w-6 h-6" />
                            </span>
                            <span class=move || theme.pick("text-gray-300", "text-gray-600")>
                                "Passionate about merging AI with practical solutions"
                            </span>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {SKILL_CARDS
                        .iter()
                        .map(|card| {
                            let card = *card;
                            view! { <SkillCardView card=card /> }
                        })
                        .collect_view()}
                </div>

                <div class="text-center">
                    <div class=move || {
                        theme
                            .pick(
                                "rounded-2xl p-8 border max-w-4xl mx-auto bg-gradient-to-r from-blue-500/10 to-purple-500/10 border-blue-500/20",
                                "rounded-2xl p-8 border max-w-4xl mx-auto bg-gradient-to-r from-blue-50 to-purple-50 border-blue-200/50",
                            )
                    }>
                        <div class="flex items-center justify-center gap-3 mb-4">
                            <span class=move || theme.pick("text-yellow-400", "text-yellow-500")>
                                <Icon name="zap" class="w-8 h-8" />
                            </span>
                            <h3 class=move || {
                                theme.pick("text-2xl font-bold text-white", "text-2xl font-bold text-gray-900")
                            }>"My Mission"</h3>
                        </div>
                        <p class=move || {
                            theme
                                .pick(
                                    "text-lg leading-relaxed text-gray-300",
                                    "text-lg leading-relaxed text-gray-600",
                                )
                        }>
                            "Bridging the gap between human creativity and artificial intelligence by engineering intelligent, scalable systems that enhance productivity, automate complex workflows, and drive innovation across industries. Focused on building AI-powered platforms that elevate learning experiences, optimize business operations, and deliver seamless, user-centered solutions — ensuring that technology remains powerful, accessible, and impactful for all."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCardView(card: SkillCard) -> impl IntoView {
    let theme = ThemeContext::expect();
    let shown_technologies = card.technologies.iter().take(2);
    let more = card.technologies.len().saturating_sub(2);

    let chip_class = move || {
        theme.pick(
            "px-2 py-1 rounded-full text-xs bg-gray-700 text-gray-300",
            "px-2 py-1 rounded-full text-xs bg-gray-100 text-gray-700",
        )
    };

    view! {
        <div class="group cursor-pointer">
            <div class=move || {
                theme
                    .pick(
                        "p-6 rounded-xl border transition-all duration-300 h-full relative overflow-hidden bg-gray-800 border-gray-700 hover:border-gray-600",
                        "p-6 rounded-xl border transition-all duration-300 h-full relative overflow-hidden bg-white border-gray-200 hover:border-gray-300 shadow-sm hover:shadow-md",
                    )
            }>
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-5 transition-opacity duration-300",
                    card.gradient,
                )></div>

                <div class=format!(
                    "w-16 h-16 rounded-full bg-gradient-to-r {} p-4 mb-4 group-hover:scale-110 transition-transform duration-300 relative z-10",
                    card.gradient,
                )>
                    <span class="text-white">
                        <Icon name=card.icon class="w-8 h-8" />
                    </span>
                </div>

                <h3 class=move || {
                    theme
                        .pick(
                            "text-xl font-bold mb-2 relative z-10 text-white",
                            "text-xl font-bold mb-2 relative z-10 text-gray-900",
                        )
                }>{card.title}</h3>
                <p class=move || {
                    theme.pick("mb-4 relative z-10 text-gray-400", "mb-4 relative z-10 text-gray-600")
                }>{card.description}</p>

                <div class="flex flex-wrap gap-2 relative z-10">
                    {shown_technologies
                        .map(|tech| view! { <span class=chip_class>{*tech}</span> })
                        .collect_view()}
                    {(more > 0)
                        .then(|| view! { <span class=chip_class>{format!("+{more} more")}</span> })}
                </div>
            </div>
        </div>
    }
}
