//! Server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is built with Leptos `view!` and rendered straight to a string
//! on the server. There is no hydration: interactive state (carousel index,
//! card face, drafts) travels through links and form posts instead.

pub mod detail;
pub mod gallery;
pub mod splash;

use leptos::prelude::*;

/// Site header shown on every page.
#[component]
pub fn HeroHeader(title: String) -> impl IntoView {
    view! {
        <header class="hero-header">
            <a class="hero-header__home" href="/">
                <h1 class="hero-header__title">{title}</h1>
            </a>
        </header>
    }
}

/// Wrap `body` in the document shell and render it.
pub fn render_page(title: &str, body: AnyView) -> String {
    let title = title.to_owned();
    let owner = Owner::new();
    owner.with(move || {
        let heading = title.clone();
        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <link rel="stylesheet" href="/assets/gallery.css"/>
                </head>
                <body>
                    <HeroHeader title=heading/>
                    {body}
                </body>
            </html>
        }
        .to_html()
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
