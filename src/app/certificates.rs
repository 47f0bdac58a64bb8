use leptos::prelude::*;

use crate::content::CERTIFICATES;
use crate::theme::ThemeContext;

use super::icons::Icon;

#[component]
pub fn Certificates() -> impl IntoView {
    let theme = ThemeContext::expect();

    view! {
        <section
            id="certificates"
            class=move || {
                theme
                    .pick(
                        "py-3 bg-gray-900 transition-colors duration-300",
                        "py-3 bg-white transition-colors duration-300",
                    )
            }
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-2">
                    <h2 class=move || {
                        theme
                            .pick(
                                "text-4xl md:text-5xl font-bold mb-6 text-white",
                                "text-4xl md:text-5xl font-bold mb-6 text-gray-900",
                            )
                    }>
                        "My "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            "Certificates"
                        </span>
                    </h2>
                    <p class=move || {
                        theme
                            .pick(
                                "text-lg max-w-3xl mx-auto text-gray-300",
                                "text-lg max-w-3xl mx-auto text-gray-600",
                            )
                    }>
                        "Recognitions from HackerRank and NamasteDev for my expertise in JavaScript, React, and frontend development."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {CERTIFICATES
                        .iter()
                        .map(|cert| {
                            let cert = *cert;
                            view! {
                                <a
                                    href=cert.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=move || {
                                        theme
                                            .pick(
                                                "p-5 rounded-xl border shadow-md transition-all duration-300 cursor-pointer bg-gray-800 border-gray-700 hover:border-gray-600",
                                                "p-5 rounded-xl border shadow-md transition-all duration-300 cursor-pointer bg-gray-50 border-gray-200 hover:border-gray-300",
                                            )
                                    }
                                >
                                    <div class="flex items-center gap-4 mb-3">
                                        <img
                                            src=cert.image
                                            alt=cert.title
                                            class="w-12 h-12 object-cover rounded-md"
                                        />
                                        <div>
                                            <h3 class=move || {
                                                theme
                                                    .pick(
                                                        "font-semibold text-lg text-white",
                                                        "font-semibold text-lg text-gray-800",
                                                    )
                                            }>{cert.title}</h3>
                                            <p class=move || {
                                                theme.pick("text-sm text-gray-400", "text-sm text-gray-600")
                                            }>{format!("{} • {}", cert.platform, cert.issued)}</p>
                                        </div>
                                    </div>
                                    <div class="flex items-center text-green-500 gap-2 text-sm mt-2">
                                        <Icon name="badge-check" class="w-4 h-4" />
                                        "Verified Certificate"
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
