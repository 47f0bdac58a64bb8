use leptos::either::Either;
use leptos::prelude::*;

use crate::content::{CodeLink, Project, PROJECTS};
use crate::interactions::Disclosure;
use crate::theme::ThemeContext;

use super::icons::Icon;

/// Project gallery. The open-dropdown index lives here, at the list level,
/// so only one card's code-link menu can be open at a time.
#[component]
pub fn Projects() -> impl IntoView {
    let theme = ThemeContext::expect();
    let (open_menu, set_open_menu) = signal(Disclosure::closed());

    view! {
        <section id="projects" class=move || theme.pick("py-20 bg-gray-800", "py-20 bg-white")>
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        theme
                            .pick(
                                "text-4xl md:text-5xl font-bold mb-6 text-white",
                                "text-4xl md:text-5xl font-bold mb-6 text-gray-900",
                            )
                    }>
                        "Featured "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            "AI Projects"
                        </span>
                    </h2>
                    <p class=move || {
                        theme
                            .pick(
                                "text-xl max-w-3xl mx-auto text-gray-300",
                                "text-xl max-w-3xl mx-auto text-gray-600",
                            )
                    }>
                        "Explore my latest work in AI and full-stack development, showcasing innovative solutions that combine cutting-edge technology with practical applications."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let project = *project;
                            view! {
                                <ProjectCard
                                    index=index
                                    project=project
                                    open_menu=open_menu
                                    set_open_menu=set_open_menu
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: Project,
    open_menu: ReadSignal<Disclosure>,
    set_open_menu: WriteSignal<Disclosure>,
) -> impl IntoView {
    let theme = ThemeContext::expect();

    let card_class = move || {
        let base = theme.pick(
            "group rounded-xl overflow-hidden border transition-all duration-300 bg-gray-900 border-gray-700 hover:border-gray-600",
            "group rounded-xl overflow-hidden border transition-all duration-300 bg-white border-gray-200 hover:border-gray-300 shadow-sm hover:shadow-lg",
        );
        if project.featured {
            // featured projects span a wider grid cell
            format!("{base} md:col-span-2 lg:col-span-1")
        } else {
            base.to_string()
        }
    };

    let code_button_class = move || {
        theme.pick(
            "flex items-center gap-2 px-4 py-2 border border-gray-600 text-gray-300 rounded-lg hover:bg-gray-700 transition-all duration-300",
            "flex items-center gap-2 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-100 transition-all duration-300",
        )
    };

    let code_links = match project.code {
        CodeLink::Single(url) => Either::Left(
            view! {
                <a href=url class=code_button_class>
                    <Icon name="github" class="w-4 h-4" />
                    "Code"
                </a>
            },
        ),
        CodeLink::Multiple(links) => Either::Right(
            view! {
                <div class="relative">
                    <button
                        class=code_button_class
                        on:click=move |_| set_open_menu.update(|d| *d = d.toggle(index))
                    >
                        <Icon name="github" class="w-4 h-4" />
                        "Code"
                        <Icon name="chevron-down" class="w-4 h-4" />
                    </button>
                    <Show when=move || open_menu.get().is_open(index)>
                        <div class=move || {
                            theme
                                .pick(
                                    "absolute bottom-full left-0 mb-2 w-36 rounded-lg border shadow-lg z-20 bg-gray-800 border-gray-700",
                                    "absolute bottom-full left-0 mb-2 w-36 rounded-lg border shadow-lg z-20 bg-white border-gray-200",
                                )
                        }>
                            {links
                                .iter()
                                .map(|link| {
                                    let link = *link;
                                    view! {
                                        <a
                                            href=link.url
                                            class=move || {
                                                theme
                                                    .pick(
                                                        "block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700 first:rounded-t-lg last:rounded-b-lg",
                                                        "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 first:rounded-t-lg last:rounded-b-lg",
                                                    )
                                            }
                                            on:click=move |_| {
                                                set_open_menu.update(|d| *d = d.toggle(index))
                                            }
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            },
        ),
    };

    view! {
        <div class=card_class>
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-300"
                />
                <div class=move || {
                    theme
                        .pick(
                            "absolute inset-0 bg-gradient-to-t to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 from-gray-900/80",
                            "absolute inset-0 bg-gradient-to-t to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 from-white/80",
                        )
                }></div>

                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white px-3 py-1 rounded-full text-sm font-semibold">
                                "Featured"
                            </div>
                        }
                    })}
            </div>

            <div class="p-6">
                <h3 class=move || {
                    theme.pick("text-xl font-bold mb-2 text-white", "text-xl font-bold mb-2 text-gray-900")
                }>{project.title}</h3>
                <p class=move || {
                    theme.pick("mb-4 text-gray-300", "mb-4 text-gray-600")
                }>{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    theme
                                        .pick(
                                            "px-3 py-1 rounded-full text-sm border bg-blue-500/20 text-blue-400 border-blue-500/30",
                                            "px-3 py-1 rounded-full text-sm border bg-blue-100 text-blue-700 border-blue-300/50",
                                        )
                                }>{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-4">
                    <a
                        href=project.live_demo
                        class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300"
                    >
                        <Icon name="play" class="w-4 h-4" />
                        "Live Demo"
                    </a>
                    {code_links}
                </div>
            </div>
        </div>
    }
}
