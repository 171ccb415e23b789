//! Detail modal: one user's card with a stats face and a messages face.

use leptos::prelude::*;

use super::render_page;
use crate::services::carousel::{Carousel, Direction, Face};
use crate::services::comments::{CommentPanel, Origin};
use crate::state::User;

/// Keyboard shortcuts for the modal, scroll-to-latest for the panel, and the
/// pending state of the send button while the form post is in flight.
/// Targets come from the `data-*` attributes rendered on `.modal` and
/// `.messages__send`.
const MODAL_SCRIPT: &str = r"
document.addEventListener('keydown', function (e) {
  var modal = document.querySelector('.modal');
  if (!modal || e.target.tagName === 'INPUT') return;
  var target = null;
  if (e.key === 'Escape') target = modal.dataset.close;
  if (e.key === 'ArrowLeft') target = modal.dataset.prev;
  if (e.key === 'ArrowRight') target = modal.dataset.next;
  if (target) window.location.href = target;
});
var end = document.getElementById('messages-end');
if (end) end.scrollIntoView();
var form = document.querySelector('.messages__form');
if (form) form.addEventListener('submit', function () {
  var send = form.querySelector('.messages__send');
  send.disabled = true;
  send.textContent = send.dataset.pending;
});
";

const SEND_LABEL: &str = "Send";
const PENDING_LABEL: &str = "Saving...";

pub struct DetailView {
    pub user: User,
    pub avatar: String,
    pub carousel: Carousel,
    pub panel: CommentPanel,
}

pub fn detail_page(title: &str, detail: DetailView) -> String {
    let DetailView { user, avatar, carousel, panel } = detail;
    let links = carousel.links();
    let slide = match carousel.direction() {
        Direction::Forward => "card--from-right",
        Direction::Backward => "card--from-left",
    };
    let card_class = format!("carousel-container card {slide} card--{}", carousel.face().as_str());
    let position = format!("{} / {}", carousel.index() + 1, carousel.len());

    let face = match carousel.face() {
        Face::Stats => stats_face(&user, avatar),
        Face::Messages => messages_face(&panel, format!("/heroes/{}/comments", carousel.index())),
    };

    let (data_prev, data_next, data_close) = (links.prev.clone(), links.next.clone(), links.close.clone());
    let backdrop_href = links.close.clone();
    let body = view! {
        <div class="modal" data-prev=data_prev data-next=data_next data-close=data_close>
            <a class="modal__backdrop" href=backdrop_href aria-label="Close"></a>
            <div class=card_class>
                <h1 class="card__name">{user.name.clone()}</h1>
                {face}
                <nav class="card__controls">
                    <a class="card__prev" href=links.prev aria-label="Previous hero">"←"</a>
                    <span class="card__position">{position}</span>
                    <a class="card__flip" href=links.flip aria-label="Flip card">"⟳"</a>
                    <a class="card__next" href=links.next aria-label="Next hero">"→"</a>
                    <a class="card__close" href=links.close aria-label="Close">"✕"</a>
                </nav>
            </div>
        </div>
        <script inner_html=MODAL_SCRIPT></script>
    }
    .into_any();

    render_page(title, body)
}

fn stats_face(user: &User, avatar: String) -> AnyView {
    let alt = format!("Hero {}", user.name);
    let team = format!("Team: {}", user.team.as_deref().unwrap_or("Unknown"));
    let time = format!("Time on Project: {}", user.time_on_project.as_deref().unwrap_or("N/A"));
    let tickets = match user.tickets_completed {
        Some(n) if n != 0 => format!("Tickets Worked on: {n}"),
        _ => "Tickets Worked on: N/A".to_owned(),
    };
    let moment = format!("Favourite Moment: {}", user.favourite_moment.as_deref().unwrap_or("None yet"));
    let pdf_href = format!("/heroes/{}/card.pdf", user.id);
    let icon_href = format!("/heroes/{}/icon.png", user.id);

    view! {
        <section class="card__face card__face--stats">
            <div class="card__downloads">
                <a class="download download--pdf" href=pdf_href>"Download PDF"</a>
                <a class="download download--icon" href=icon_href>"Download Icon"</a>
            </div>
            <img class="card__avatar" src=avatar alt=alt width="250" height="250"/>
            <ul class="card__stats">
                <li class="stat stat--team">{team}</li>
                <li class="stat stat--time">{time}</li>
                <li class="stat stat--tickets">{tickets}</li>
                <li class="stat stat--moment">{moment}</li>
            </ul>
        </section>
    }
    .into_any()
}

fn comment_bubble(author: String, content: String, mine: bool, optimistic: bool) -> AnyView {
    let mut class = String::from("bubble");
    if mine {
        class.push_str(" bubble--mine");
    }
    if optimistic {
        class.push_str(" bubble--optimistic");
    }
    view! {
        <div class=class>
            <strong class="bubble__author">{format!("{author}:")}</strong>
            " "
            {content}
        </div>
    }
    .into_any()
}

fn messages_face(panel: &CommentPanel, action: String) -> AnyView {
    let bubbles: Vec<AnyView> = panel
        .entries()
        .iter()
        .map(|entry| {
            comment_bubble(
                entry.comment.author.clone(),
                entry.comment.content.clone(),
                panel.is_mine(entry),
                entry.origin == Origin::Optimistic,
            )
        })
        .collect();
    let empty = bubbles.is_empty();
    let needs_author = panel.needs_author();
    let author = panel.author_draft().to_owned();
    let draft = panel.message_draft().to_owned();
    let error = panel.error().map(str::to_owned);
    let pending = panel.is_pending();
    let label = if pending { PENDING_LABEL } else { SEND_LABEL };
    let user_id = panel.user_id().to_string();

    view! {
        <section class="card__face card__face--messages">
            <h3 class="messages__title">"Messages"</h3>
            <div class="messages__list">
                {bubbles}
                {empty.then(|| view! { <p class="messages__empty">"No heroic messages yet. Be the first!"</p> })}
                <div id="messages-end"></div>
            </div>
            <form class="messages__form" method="post" action=action>
                <input type="hidden" name="user_id" value=user_id/>
                {needs_author.then(move || view! {
                    <input class="messages__author" type="text" name="name" placeholder="Enter your name..." value=author/>
                })}
                <div class="messages__compose">
                    <input class="messages__input" type="text" name="content" placeholder="Type a message..." value=draft/>
                    <button class="messages__send" type="submit" disabled=pending data-pending=PENDING_LABEL>{label}</button>
                </div>
                {error.map(|e| view! { <p class="messages__error">{e}</p> })}
            </form>
        </section>
    }
    .into_any()
}
