use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_ITEMS, SITE_NAME};
use crate::interactions::header_scrolled;
use crate::theme::ThemeContext;

use super::icons::Icon;

/// Fixed nav bar. Swaps to an opaque blurred background once the viewport
/// scrolls past the threshold; the mobile menu closes whenever a nav link is
/// activated.
#[component]
pub fn Header() -> impl IntoView {
    let theme = ThemeContext::expect();
    let (menu_open, set_menu_open) = signal(false);

    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| header_scrolled(scroll_y.get()));

    let header_class = move || {
        if scrolled.get() {
            theme.pick(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-gray-900/90 backdrop-blur-md shadow-2xl border-b border-gray-700/20",
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/90 backdrop-blur-md shadow-2xl border-b border-gray-200/20",
            )
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    let nav_link_class = move || {
        theme.pick(
            "text-gray-300 hover:text-white transition-colors duration-200 relative group",
            "text-gray-600 hover:text-gray-900 transition-colors duration-200 relative group",
        )
    };

    let control_class = move || {
        theme.pick(
            "p-2 rounded-full bg-gray-800 text-white hover:bg-gray-700 transition-colors duration-200",
            "p-2 rounded-full bg-gray-200 text-gray-900 hover:bg-gray-300 transition-colors duration-200",
        )
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-bold">
                        <a
                            href="#home"
                            class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent"
                        >
                            {SITE_NAME}
                        </a>
                    </div>

                    // Desktop navigation
                    <nav class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let item = *item;
                                view! {
                                    <a href=item.href class=nav_link_class>
                                        {item.name}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-blue-400 to-purple-600 transition-all duration-300 group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    // Theme switch & mobile menu button
                    <div class="flex items-center space-x-4">
                        <button
                            class=control_class
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle()
                        >
                            {move || {
                                if theme.dark() {
                                    view! { <Icon name="sun" class="w-5 h-5" /> }
                                } else {
                                    view! { <Icon name="moon" class="w-5 h-5" /> }
                                }
                            }}
                        </button>

                        <button
                            class=move || format!("md:hidden {}", control_class())
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon name="x" class="w-6 h-6" /> }
                                } else {
                                    view! { <Icon name="menu" class="w-6 h-6" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-4 pb-4">
                        <div class="flex flex-col space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    let item = *item;
                                    view! {
                                        <a
                                            href=item.href
                                            class=move || format!("{} py-2", nav_link_class())
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {item.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
