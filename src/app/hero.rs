use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::{HERO_SKILLS, HERO_STATS, RESUME_FILENAME, RESUME_URL};
use crate::theme::ThemeContext;
use crate::typewriter::{Typewriter, TICK_MS};

use super::icons::Icon;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = ThemeContext::expect();

    // The interval handle is released automatically when this component's
    // scope is disposed.
    let typewriter = RwSignal::new(Typewriter::new(HERO_SKILLS));
    let _pausable = use_interval_fn(
        move || typewriter.update(|t| t.tick()),
        TICK_MS,
    );
    let typed = move || typewriter.with(|t| t.text());

    view! {
        <section
            id="home"
            class=move || {
                theme
                    .pick(
                        "min-h-screen relative overflow-hidden bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900",
                        "min-h-screen relative overflow-hidden bg-gradient-to-br from-gray-50 via-blue-50 to-purple-50",
                    )
            }
        >
            // Background grid
            <div class=move || theme.pick("absolute inset-0 opacity-10", "absolute inset-0 opacity-5")>
                <div class=move || {
                    theme
                        .pick(
                            "absolute inset-0 bg-[linear-gradient(rgba(59,130,246,0.1)_1px,transparent_1px),linear-gradient(90deg,rgba(59,130,246,0.1)_1px,transparent_1px)] bg-[size:100px_100px] [mask-image:radial-gradient(ellipse_80%_50%_at_50%_0%,#000_70%,transparent_110%)]",
                            "absolute inset-0 bg-[linear-gradient(rgba(59,130,246,0.05)_1px,transparent_1px),linear-gradient(90deg,rgba(59,130,246,0.05)_1px,transparent_1px)] bg-[size:100px_100px] [mask-image:radial-gradient(ellipse_80%_50%_at_50%_0%,#000_70%,transparent_110%)]",
                        )
                }></div>
            </div>

            // Floating particles, deterministic positions, CSS-animated
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {(0..20_usize)
                    .map(|i| {
                        let left = (i * 37) % 100;
                        let top = (i * 53) % 100;
                        let delay_ms = (i % 6) * 500;
                        view! {
                            <div
                                class=move || {
                                    theme
                                        .pick(
                                            "absolute w-2 h-2 rounded-full bg-blue-400 animate-pulse",
                                            "absolute w-2 h-2 rounded-full bg-blue-500 animate-pulse",
                                        )
                                }
                                style=format!(
                                    "left:{left}%;top:{top}%;animation-delay:{delay_ms}ms",
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-6 py-20 relative z-10">
                <div class="flex flex-col items-center justify-center min-h-screen text-center">
                    <div class="mb-8">
                        // Badge
                        <div class=move || {
                            theme
                                .pick(
                                    "inline-flex items-center gap-2 px-4 py-2 rounded-full border mb-8 bg-gradient-to-r from-blue-500/20 to-purple-500/20 border-blue-500/30",
                                    "inline-flex items-center gap-2 px-4 py-2 rounded-full border mb-8 bg-gradient-to-r from-blue-100 to-purple-100 border-blue-300/50",
                                )
                        }>
                            <span class=move || theme.pick("text-blue-400", "text-blue-600")>
                                <Icon name="brain" class="w-5 h-5" />
                            </span>
                            <span class=move || {
                                theme.pick("font-semibold text-blue-400", "font-semibold text-blue-700")
                            }>"Full Stack Developer & AI Enthusiast"</span>
                            <span class=move || theme.pick("text-purple-400", "text-purple-600")>
                                <Icon name="sparkles" class="w-4 h-4" />
                            </span>
                        </div>

                        <h1 class=move || {
                            theme
                                .pick(
                                    "text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight text-white",
                                    "text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight text-gray-900",
                                )
                        }>
                            <span class="bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                                "Building Smart Solutions"
                            </span>
                            <br />
                            <span>"with Code and Intelligence"</span>
                        </h1>

                        <div class=move || {
                            theme
                                .pick(
                                    "text-xl md:text-2xl mb-4 text-gray-300",
                                    "text-xl md:text-2xl mb-4 text-gray-600",
                                )
                        }>
                            "Full Stack Developer | AI Explorer | Automation Tester | Empowering the Future with Scalable Solutions"
                        </div>

                        // Typed skill line
                        <div class=move || {
                            theme
                                .pick(
                                    "text-lg md:text-xl h-8 flex items-center justify-center mb-2 text-blue-400",
                                    "text-lg md:text-xl h-8 flex items-center justify-center mb-2 text-blue-600",
                                )
                        }>
                            <span class="mr-2">"Specializing in: "</span>
                            <span class=move || {
                                theme
                                    .pick(
                                        "font-mono min-w-[200px] text-left text-purple-400",
                                        "font-mono min-w-[200px] text-left text-purple-600",
                                    )
                            }>{typed} <span class="ml-1 animate-pulse">"|"</span></span>
                        </div>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 mb-12">
                        <a
                            href="#projects"
                            class=move || {
                                theme
                                    .pick(
                                        "px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-full font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 flex items-center gap-3 shadow-lg",
                                        "px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-full font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 flex items-center gap-3 shadow-lg shadow-blue-200",
                                    )
                            }
                        >
                            <Icon name="external-link" class="w-5 h-5" />
                            "View My Work"
                            <span>"→"</span>
                        </a>

                        <a
                            href=RESUME_URL
                            download=RESUME_FILENAME
                            target="_blank"
                            rel="noopener noreferrer"
                            class=move || {
                                theme
                                    .pick(
                                        "px-8 py-4 border-2 rounded-full font-semibold text-lg transition-all duration-300 flex items-center gap-3 border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-white",
                                        "px-8 py-4 border-2 rounded-full font-semibold text-lg transition-all duration-300 flex items-center gap-3 border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white",
                                    )
                            }
                        >
                            <Icon name="download" class="w-5 h-5" />
                            "Download Resume"
                        </a>
                    </div>

                    // Stats
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-12">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                let stat = *stat;
                                view! {
                                    <div class="text-center">
                                        <div class=move || {
                                            theme
                                                .pick(
                                                    "text-2xl md:text-3xl font-bold mb-1 text-white",
                                                    "text-2xl md:text-3xl font-bold mb-1 text-gray-900",
                                                )
                                        }>{stat.value}</div>
                                        <div class=move || {
                                            theme.pick("text-sm text-gray-400", "text-sm text-gray-600")
                                        }>{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a
                        href="#about"
                        class="absolute bottom-10 left-1/2 transform -translate-x-1/2 cursor-pointer animate-bounce"
                    >
                        <span class=move || theme.pick("text-blue-400", "text-blue-600")>
                            <Icon name="chevron-down" class="w-8 h-8" />
                        </span>
                    </a>
                </div>
            </div>
        </section>
    }
}
