use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{FOOTER_COLUMNS, FOOTER_SOCIALS, SITE_NAME};
use crate::theme::ThemeContext;

use super::icons::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    let theme = ThemeContext::expect();
    let year = Utc::now().year();

    view! {
        <footer class=move || {
            theme
                .pick(
                    "border-t bg-gray-900 border-gray-800",
                    "border-t bg-white border-gray-200",
                )
        }>
            <div class="container mx-auto px-6 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    // Brand
                    <div class="lg:col-span-1">
                        <h3 class="text-2xl font-bold mb-4">
                            <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                                {SITE_NAME}
                            </span>
                        </h3>
                        <p class=move || {
                            theme
                                .pick(
                                    "mb-6 leading-relaxed text-gray-400",
                                    "mb-6 leading-relaxed text-gray-600",
                                )
                        }>
                            "Building intelligent, AI-powered assistants and full-stack web solutions. Simplifying learning, automating workflows, and driving real-world impact."
                        </p>
                        <div class="flex space-x-4">
                            {FOOTER_SOCIALS
                                .iter()
                                .map(|social| {
                                    let social = *social;
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class=move || {
                                                theme
                                                    .pick(
                                                        "p-3 rounded-full transition-all duration-300 hover:bg-gradient-to-r hover:from-blue-500 hover:to-purple-600 hover:text-white bg-gray-800 text-gray-400",
                                                        "p-3 rounded-full transition-all duration-300 hover:bg-gradient-to-r hover:from-blue-500 hover:to-purple-600 hover:text-white bg-gray-100 text-gray-600",
                                                    )
                                            }
                                        >
                                            <Icon name=social.icon class="w-5 h-5" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Link columns
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            let column = *column;
                            view! {
                                <div class="lg:col-span-1">
                                    <h4 class=move || {
                                        theme
                                            .pick(
                                                "font-semibold mb-4 text-white",
                                                "font-semibold mb-4 text-gray-900",
                                            )
                                    }>{column.title}</h4>
                                    <ul class="space-y-2">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                let link = *link;
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.href
                                                            class=move || {
                                                                theme
                                                                    .pick(
                                                                        "transition-colors duration-200 flex items-center gap-2 group text-gray-400 hover:text-white",
                                                                        "transition-colors duration-200 flex items-center gap-2 group text-gray-600 hover:text-gray-900",
                                                                    )
                                                            }
                                                        >
                                                            {link.name}
                                                            <span class="opacity-0 group-hover:opacity-100 transition-opacity duration-200">
                                                                <Icon name="external-link" class="w-3 h-3" />
                                                            </span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Bottom strip
                <div class="border-t border-gray-800 mt-12 pt-8">
                    <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                        <div class=move || {
                            theme
                                .pick(
                                    "flex items-center gap-2 text-gray-400",
                                    "flex items-center gap-2 text-gray-600",
                                )
                        }>
                            <span>{format!("© {year} {SITE_NAME}. Made with")}</span>
                            <span class="text-red-500">
                                <Icon name="heart" class="w-4 h-4" />
                            </span>
                            <span>"and"</span>
                            <span class="text-blue-500">
                                <Icon name="code" class="w-4 h-4" />
                            </span>
                        </div>

                        <div class=move || {
                            theme
                                .pick(
                                    "flex flex-col md:flex-row items-center gap-4 text-sm text-gray-400",
                                    "flex flex-col md:flex-row items-center gap-4 text-sm text-gray-600",
                                )
                        }>
                            <span>"Available for freelance projects"</span>
                            <div class="flex items-center gap-2">
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                                <span class="text-green-500">"Open to work"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
