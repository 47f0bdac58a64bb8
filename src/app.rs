mod about;
mod certificates;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod icons;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{Theme, ThemeContext};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use about::About;
use certificates::Certificates;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root composer: owns the theme flag, persists it, toggles the root `dark`
/// class, and renders the sections in their fixed order.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The theme flag lives in localStorage under a single key; absence or an
    // unreadable value falls back to dark. On the server there is nothing to
    // read, so the signal just starts at the default.
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) =
        use_local_storage::<Theme, FromToStringCodec>(crate::theme::THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    ThemeContext::new(theme, set_theme).provide();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Monika - {title}") />

        <Html attr:class=move || if theme.get().is_dark() { "dark" } else { "" } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let theme = ThemeContext::expect();

    view! {
        <Title text="Portfolio" />
        <div class="overflow-x-hidden">
            <div class=move || {
                theme
                    .pick(
                        "bg-gray-900 text-white transition-colors duration-300",
                        "bg-white text-gray-900 transition-colors duration-300",
                    )
            }>
                <Header />
                <Hero />
                <About />
                <Projects />
                <Experience />
                <Certificates />
                <Contact />
                <Footer />
            </div>
        </div>
    }
}
