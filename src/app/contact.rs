use leptos::prelude::*;

use crate::content::{
    CONTACT_CHANNELS, CONTACT_FORM_ENDPOINT, CONTACT_FORM_NAME, CONTACT_FORM_REDIRECT,
    SOCIAL_LINKS,
};
use crate::theme::ThemeContext;

use super::icons::Icon;

/// Contact section. Submission is handled entirely by the external hosted
/// form endpoint; the only client-side validation is the browser's own
/// `required` handling.
#[component]
pub fn Contact() -> impl IntoView {
    let theme = ThemeContext::expect();

    let input_class = move || {
        theme.pick(
            "w-full px-4 py-3 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300 bg-gray-700 border-gray-600 text-white placeholder-gray-400",
            "w-full px-4 py-3 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300 bg-white border-gray-300 text-gray-900 placeholder-gray-500",
        )
    };
    let label_class = move || {
        theme.pick(
            "block text-sm font-medium mb-2 text-gray-300",
            "block text-sm font-medium mb-2 text-gray-700",
        )
    };
    let panel_class = move || {
        theme.pick(
            "p-8 rounded-2xl border bg-gray-800 border-gray-700",
            "p-8 rounded-2xl border bg-white border-gray-200 shadow-sm",
        )
    };
    let panel_title_class = move || {
        theme.pick(
            "text-2xl font-bold mb-6 text-white",
            "text-2xl font-bold mb-6 text-gray-900",
        )
    };

    view! {
        <section
            id="contact"
            class=move || {
                theme
                    .pick(
                        "py-20 relative overflow-hidden bg-gray-900",
                        "py-20 relative overflow-hidden bg-gray-50",
                    )
            }
        >
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
                        "Let's Build Something "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            "Amazing"
                        </span>
                    </h2>
                    <p class=move || {
                        theme
                            .pick(
                                "text-xl max-w-3xl mx-auto text-gray-300",
                                "text-xl max-w-3xl mx-auto text-gray-600",
                            )
                    }>
                        "Ready to discuss your next AI project? I'd love to hear about your ideas and explore how we can bring them to life."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    // Form, delegated to the hosted endpoint
                    <div class=move || {
                        theme
                            .pick(
                                "p-8 rounded-2xl border transition-all duration-300 bg-gray-800 border-gray-700 hover:border-gray-600",
                                "p-8 rounded-2xl border transition-all duration-300 bg-white border-gray-200 hover:border-gray-300 shadow-sm hover:shadow-md",
                            )
                    }>
                        <h3 class=panel_title_class>"Send a Message"</h3>
                        <form action=CONTACT_FORM_ENDPOINT method="POST" class="space-y-6">
                            // Hidden metadata fields for the form service
                            <input type="hidden" name="_redirect" value=CONTACT_FORM_REDIRECT />
                            <input type="hidden" name="_formname" value=CONTACT_FORM_NAME />
                            <input type="text" name="_honeypot" style="display: none" />

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div>
                                    <label for="name" class=label_class>
                                        "Your Name"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required
                                        class=input_class
                                        placeholder="John Doe"
                                    />
                                </div>
                                <div>
                                    <label for="email" class=label_class>
                                        "Your Email"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required
                                        class=input_class
                                        placeholder="john@example.com"
                                    />
                                </div>
                            </div>

                            <div>
                                <label for="subject" class=label_class>
                                    "Subject"
                                </label>
                                <input
                                    type="text"
                                    id="subject"
                                    name="subject"
                                    required
                                    class=input_class
                                    placeholder="AI Project Collaboration"
                                />
                            </div>

                            <div>
                                <label for="message" class=label_class>
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required
                                    rows="6"
                                    class=move || format!("{} resize-none", input_class())
                                    placeholder="Tell me about your project ideas..."
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="w-full px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-lg font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 flex items-center justify-center gap-2"
                            >
                                <Icon name="send" class="w-5 h-5" />
                                "Send Message"
                            </button>
                        </form>
                    </div>

                    <div class="space-y-8">
                        // Contact channels
                        <div class=panel_class>
                            <h3 class=panel_title_class>"Get in Touch"</h3>
                            <div class="space-y-4">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .map(|channel| {
                                        let channel = *channel;
                                        view! {
                                            <a
                                                href=channel.link
                                                class=move || {
                                                    theme
                                                        .pick(
                                                            "flex items-center gap-4 p-4 rounded-lg transition-all duration-300 group bg-gray-700 hover:bg-gray-600",
                                                            "flex items-center gap-4 p-4 rounded-lg transition-all duration-300 group bg-gray-50 hover:bg-gray-100",
                                                        )
                                                }
                                            >
                                                <span class=move || {
                                                    theme
                                                        .pick(
                                                            "transition-colors duration-300 text-blue-400 group-hover:text-blue-300",
                                                            "transition-colors duration-300 text-blue-600 group-hover:text-blue-500",
                                                        )
                                                }>
                                                    <Icon name=channel.icon class="w-6 h-6" />
                                                </span>
                                                <div>
                                                    <h4 class=move || {
                                                        theme
                                                            .pick(
                                                                "font-semibold text-white",
                                                                "font-semibold text-gray-900",
                                                            )
                                                    }>{channel.title}</h4>
                                                    <p class=move || {
                                                        theme.pick("text-gray-300", "text-gray-600")
                                                    }>{channel.value}</p>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Social links
                        <div class=panel_class>
                            <h3 class=panel_title_class>"Connect with Me"</h3>
                            <div class="grid grid-cols-1 gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        let social = *social;
                                        view! {
                                            <a
                                                href=social.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=format!(
                                                    "flex items-center gap-4 p-4 bg-gradient-to-r {} rounded-lg hover:shadow-lg transition-all duration-300 group",
                                                    social.gradient,
                                                )
                                            >
                                                <span class="text-white group-hover:scale-110 transition-transform duration-300">
                                                    <Icon name=social.icon class="w-6 h-6" />
                                                </span>
                                                <div class="flex-1">
                                                    <span class="text-white font-semibold">{social.name}</span>
                                                </div>
                                                <span class="text-white opacity-70 group-hover:opacity-100 transition-opacity duration-300">
                                                    <Icon name="external-link" class="w-4 h-4" />
                                                </span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Availability
                        <div class=move || {
                            theme
                                .pick(
                                    "p-8 rounded-2xl border bg-gradient-to-r from-green-500/10 to-blue-500/10 border-green-500/20",
                                    "p-8 rounded-2xl border bg-gradient-to-r from-green-50 to-blue-50 border-green-200/50",
                                )
                        }>
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                <h3 class=move || {
                                    theme
                                        .pick(
                                            "text-xl font-bold text-white",
                                            "text-xl font-bold text-gray-900",
                                        )
                                }>"Available for Projects"</h3>
                            </div>
                            <p class=move || theme.pick("text-gray-300", "text-gray-600")>
                                "I'm currently open to new opportunities and collaborations. Whether you need an AI solution, full-stack development, or technical consultation, I'd love to discuss how we can work together."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
