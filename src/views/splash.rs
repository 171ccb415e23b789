//! One-time name prompt shown until the display-name cookie exists.

use leptos::prelude::*;

use super::render_page;
use crate::services::session::MAX_NAME_CHARS;

pub const RETRY_PROMPT: &str = "Please enter a name to continue.";

/// Render the splash page. `prompt` is shown under the form after a blank
/// submission.
pub fn splash_page(title: &str, prompt: Option<&str>) -> String {
    let prompt = prompt.map(str::to_owned);
    let body = view! {
        <main class="splash">
            <div class="splash__panel">
                <h2 class="splash__title">"Welcome, Hero!"</h2>
                <p class="splash__hint">"Enter your name to continue:"</p>
                <form class="splash__form" method="post" action="/session">
                    <input
                        class="splash__input"
                        type="text"
                        name="name"
                        placeholder="Your Hero Name"
                        maxlength=MAX_NAME_CHARS.to_string()
                        autofocus=true
                    />
                    <button class="splash__start" type="submit">"Start"</button>
                </form>
                {prompt.map(|p| view! { <p class="splash__error">{p}</p> })}
            </div>
        </main>
    }
    .into_any();

    render_page(title, body)
}
