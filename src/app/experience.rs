use leptos::prelude::*;

use crate::content::{ExperienceEntry, TechProficiency, EXPERIENCES, TECH_STACK};
use crate::theme::ThemeContext;

use super::icons::Icon;

#[component]
pub fn Experience() -> impl IntoView {
    let theme = ThemeContext::expect();

    view! {
        <section id="experience" class=move || theme.pick("py-20 bg-gray-900", "py-20 bg-gray-50")>
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        theme
                            .pick(
                                "text-4xl md:text-5xl font-bold mb-6 text-white",
                                "text-4xl md:text-5xl font-bold mb-6 text-gray-900",
                            )
                    }>
                        "Experience & "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            "Skills"
                        </span>
                    </h2>
                    <p class=move || {
                        theme
                            .pick(
                                "text-xl max-w-3xl mx-auto text-gray-300",
                                "text-xl max-w-3xl mx-auto text-gray-600",
                            )
                    }>
                        "My journey in software development and AI, featuring key achievements and technical expertise."
                    </p>
                </div>

                // Timeline
                <div class="mb-20">
                    <h3 class=move || {
                        theme
                            .pick(
                                "text-2xl font-bold mb-8 text-center text-white",
                                "text-2xl font-bold mb-8 text-center text-gray-900",
                            )
                    }>"Professional Experience"</h3>
                    <div class="relative">
                        <div class=move || {
                            theme
                                .pick(
                                    "absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-gradient-to-b from-blue-500 to-purple-600 rounded-full hidden md:block",
                                    "absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-gradient-to-b from-blue-500 to-purple-600 rounded-full hidden md:block opacity-60",
                                )
                        }></div>

                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let entry = *entry;
                                view! { <TimelineEntry index=index entry=entry /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Proficiency bars
                <div>
                    <h3 class=move || {
                        theme
                            .pick(
                                "text-2xl font-bold mb-8 text-center text-white",
                                "text-2xl font-bold mb-8 text-center text-gray-900",
                            )
                    }>"Technical Skills"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {TECH_STACK
                            .iter()
                            .map(|tech| {
                                let tech = *tech;
                                view! { <ProficiencyBar tech=tech /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(index: usize, entry: ExperienceEntry) -> impl IntoView {
    let theme = ThemeContext::expect();
    let left_side = index % 2 == 0;

    let wrapper_class = if left_side {
        "relative mb-12 md:w-1/2 md:pr-8"
    } else {
        "relative mb-12 md:w-1/2 md:pl-8 md:ml-auto"
    };
    let dot_style = if left_side {
        "right: -42px"
    } else {
        "left: -42px"
    };

    view! {
        <div class=wrapper_class>
            <div class=move || {
                theme
                    .pick(
                        "p-6 rounded-xl border transition-all duration-300 bg-gray-800 border-gray-700 hover:border-gray-600",
                        "p-6 rounded-xl border transition-all duration-300 bg-white border-gray-200 hover:border-gray-300 shadow-sm hover:shadow-md",
                    )
            }>
                // Timeline dot
                <div
                    class=move || {
                        theme
                            .pick(
                                "absolute top-1/2 transform -translate-y-1/2 w-4 h-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full border-4 hidden md:block border-gray-900",
                                "absolute top-1/2 transform -translate-y-1/2 w-4 h-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full border-4 hidden md:block border-gray-50",
                            )
                    }
                    style=dot_style
                ></div>

                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                    <div>
                        <h4 class=move || {
                            theme
                                .pick(
                                    "text-xl font-bold mb-1 text-white",
                                    "text-xl font-bold mb-1 text-gray-900",
                                )
                        }>{entry.title}</h4>
                        <p class=move || {
                            theme.pick("font-semibold text-blue-400", "font-semibold text-blue-600")
                        }>{entry.company}</p>
                    </div>
                    <div class=move || {
                        theme
                            .pick(
                                "flex flex-col items-start md:items-end text-sm text-gray-400",
                                "flex flex-col items-start md:items-end text-sm text-gray-600",
                            )
                    }>
                        <div class="flex items-center gap-1">
                            <Icon name="calendar" class="w-4 h-4" />
                            {entry.period}
                        </div>
                        <div class="flex items-center gap-1">
                            <Icon name="map-pin" class="w-4 h-4" />
                            {entry.location}
                        </div>
                    </div>
                </div>

                <p class=move || {
                    theme.pick("mb-4 text-gray-300", "mb-4 text-gray-600")
                }>{entry.description}</p>

                <div class="mb-4">
                    <h5 class=move || {
                        theme.pick("font-semibold mb-2 text-white", "font-semibold mb-2 text-gray-900")
                    }>"Key Achievements:"</h5>
                    <ul class=move || {
                        theme.pick("space-y-1 text-gray-300", "space-y-1 text-gray-600")
                    }>
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="flex items-start gap-2">
                                        <span class=move || {
                                            theme.pick("mt-1 text-blue-400", "mt-1 text-blue-600")
                                        }>"•"</span>
                                        {*achievement}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="flex flex-wrap gap-2">
                    {entry
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    theme
                                        .pick(
                                            "px-3 py-1 rounded-full text-sm border bg-purple-500/20 text-purple-400 border-purple-500/30",
                                            "px-3 py-1 rounded-full text-sm border bg-purple-100 text-purple-700 border-purple-300/50",
                                        )
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProficiencyBar(tech: TechProficiency) -> impl IntoView {
    let theme = ThemeContext::expect();

    view! {
        <div class=move || {
            theme
                .pick(
                    "p-4 rounded-lg border bg-gray-800 border-gray-700",
                    "p-4 rounded-lg border bg-white border-gray-200 shadow-sm",
                )
        }>
            <div class="flex justify-between items-center mb-2">
                <div>
                    <span class=move || {
                        theme.pick("font-semibold text-white", "font-semibold text-gray-900")
                    }>{tech.name}</span>
                    <span class=move || {
                        theme.pick("text-sm ml-2 text-gray-400", "text-sm ml-2 text-gray-600")
                    }>{format!("({})", tech.category.label())}</span>
                </div>
                <span class=move || {
                    theme.pick("text-sm text-gray-400", "text-sm text-gray-600")
                }>{format!("{}%", tech.proficiency)}</span>
            </div>
            <div class=move || {
                theme
                    .pick(
                        "w-full rounded-full h-2 bg-gray-700",
                        "w-full rounded-full h-2 bg-gray-200",
                    )
            }>
                <div
                    class=format!("h-2 rounded-full bg-gradient-to-r {}", tech.category.gradient())
                    style=format!("width: {}%", tech.proficiency)
                ></div>
            </div>
        </div>
    }
}
