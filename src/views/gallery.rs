//! Gallery grid: one clickable tile per user.

use leptos::prelude::*;

use super::render_page;
use crate::services::export::avatar_url;
use crate::state::User;

/// Everything a tile needs, detached from the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub href: String,
    pub avatar: String,
    pub name: String,
    pub comment_count: usize,
}

impl Tile {
    /// Tile for the user at grid `position`.
    #[must_use]
    pub fn new(position: usize, user: &User, image_endpoint: &str) -> Self {
        Self {
            href: format!("/heroes/{position}"),
            avatar: avatar_url(image_endpoint, &user.name),
            name: user.name.clone(),
            comment_count: user.comments.len(),
        }
    }
}

#[component]
fn HeroTile(tile: Tile) -> impl IntoView {
    let alt = tile.name.clone();
    let count = match tile.comment_count {
        1 => "1 message".to_owned(),
        n => format!("{n} messages"),
    };
    view! {
        <a class="tile" href=tile.href>
            <img class="tile__avatar" src=tile.avatar alt=alt width="150" height="150"/>
            <p class="tile__name">{tile.name}</p>
            <p class="tile__count">{count}</p>
        </a>
    }
}

pub fn gallery_page(title: &str, tiles: Vec<Tile>) -> String {
    let body = view! {
        <main class="gallery">
            <div class="gallery__grid">
                {tiles.into_iter().map(|tile| view! { <HeroTile tile=tile/> }).collect_view()}
            </div>
        </main>
    }
    .into_any();

    render_page(title, body)
}
