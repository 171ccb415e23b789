//! Card export: PDF rendering and avatar download.
//!
//! DESIGN
//! ======
//! The PDF is a fixed A4 layout drawn with the built-in Helvetica fonts, so
//! no font files are embedded. Those fonts only cover Latin-1. Emoji are
//! drawn from PNG glyphs fetched off an emoji host and wrapped in a Type3
//! font; other characters outside Latin-1 (CJK, emoji the host lacks) print
//! as `?`. Text that runs past the bottom margin continues on a new page.
//!
//! Avatars are not stored here. They live on the image host under
//! `{endpoint}/{first name}.png`; two users sharing a first name share an
//! avatar. The card embeds the avatar as an image when it can be fetched
//! and decoded, and is rendered without it otherwise.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use tracing::warn;

use crate::state::User;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("pdf render failed: {0}")]
    Pdf(String),
    #[error("image fetch failed: {0}")]
    Fetch(String),
    #[error("image decode failed: {0}")]
    Image(String),
}

// =============================================================================
// NAMING
// =============================================================================

/// Avatar address for `name`: the first space-separated token plus `.png`.
#[must_use]
pub fn avatar_url(endpoint: &str, name: &str) -> String {
    let first = name.split(' ').next().unwrap_or_default();
    format!("{}/{first}.png", endpoint.trim_end_matches('/'))
}

#[must_use]
pub fn pdf_filename(name: &str) -> String {
    format!("{}_Superhero_Card.pdf", header_safe(name))
}

#[must_use]
pub fn icon_filename(name: &str) -> String {
    format!("{}_icon.png", header_safe(name))
}

/// `Content-Disposition` value for a download named `filename`.
#[must_use]
pub fn attachment_header(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' { c } else { '_' })
        .collect()
}

// =============================================================================
// AVATAR
// =============================================================================

/// Downloaded avatar bytes and the content type reported by the image host.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fetch the image at `url`: an avatar, or an emoji glyph for the PDF.
///
/// # Errors
///
/// Returns [`ExportError::Fetch`] on transport failure or a non-success status.
pub async fn fetch_avatar(http: &reqwest::Client, url: &str) -> Result<Avatar, ExportError> {
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| ExportError::Fetch(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(ExportError::Fetch(format!("{url}: status {}", resp.status())));
    }

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/png")
        .to_owned();
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ExportError::Fetch(e.to_string()))?;

    Ok(Avatar { content_type, bytes: bytes.to_vec() })
}

// =============================================================================
// IMAGES
// =============================================================================

/// A decoded image split into the planes a PDF image XObject wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    /// `None` when every pixel is opaque.
    alpha: Option<Vec<u8>>,
}

impl PdfImage {
    /// Decode PNG or JPEG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Image`] if the bytes are not a supported image.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExportError> {
        let image = image::load_from_memory(bytes).map_err(|e| ExportError::Image(e.to_string()))?;
        Ok(Self::from_rgba(&image.to_rgba8()))
    }

    #[must_use]
    pub fn from_rgba(image: &image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.as_raw().len() / 4;
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }
        let alpha = alpha.iter().any(|&a| a != u8::MAX).then_some(alpha);
        Self { width, height, rgb, alpha }
    }
}

/// Images fetched ahead of rendering. Anything missing is simply left out.
#[derive(Debug, Clone, Default)]
pub struct CardAssets {
    pub avatar: Option<PdfImage>,
    /// Glyph images keyed by emoji cluster.
    pub emoji: BTreeMap<String, PdfImage>,
}

/// Type3 codes are single bytes and code 0 is left unused.
const MAX_EMOJI_GLYPHS: usize = 255;

async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<PdfImage, ExportError> {
    let fetched = fetch_avatar(http, url).await?;
    PdfImage::decode(&fetched.bytes)
}

/// Fetch the avatar and the emoji glyphs `user`'s card needs.
///
/// Never fails: each asset that cannot be fetched or decoded is logged and
/// skipped, and the card falls back to rendering without it.
pub async fn fetch_card_assets(
    http: &reqwest::Client,
    image_endpoint: &str,
    emoji_endpoint: &str,
    user: &User,
) -> CardAssets {
    let mut assets = CardAssets::default();

    match fetch_image(http, &avatar_url(image_endpoint, &user.name)).await {
        Ok(image) => assets.avatar = Some(image),
        Err(e) => warn!(error = %e, user_id = %user.id, "card rendered without avatar"),
    }

    for cluster in card_emoji(user).into_iter().take(MAX_EMOJI_GLYPHS) {
        match fetch_image(http, &emoji_url(emoji_endpoint, &cluster)).await {
            Ok(image) => {
                assets.emoji.insert(cluster, image);
            }
            Err(e) => warn!(error = %e, emoji = %cluster, "emoji glyph unavailable"),
        }
    }

    assets
}

fn card_emoji(user: &User) -> BTreeSet<String> {
    let fields = [&user.name]
        .into_iter()
        .chain(user.team.as_ref())
        .chain(user.time_on_project.as_ref())
        .chain(user.favourite_moment.as_ref())
        .chain(user.comments.iter().flat_map(|c| [&c.author, &c.content]));
    fields.flat_map(|text| emoji_in(text)).collect()
}

// =============================================================================
// EMOJI
// =============================================================================

const ZWJ: char = '\u{200D}';
const VARIATION_EMOJI: char = '\u{FE0F}';

fn is_emoji_base(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2300..=0x23FF | 0x2B00..=0x2BFF | 0x3030 | 0x303D | 0x3297 | 0x3299
    )
}

fn is_regional_indicator(c: char) -> bool {
    matches!(u32::from(c), 0x1F1E6..=0x1F1FF)
}

/// Marks that attach to the preceding emoji: variation selectors, skin
/// tones, the keycap mark and tag characters.
fn is_emoji_modifier(c: char) -> bool {
    matches!(u32::from(c), 0xFE0E | 0xFE0F | 0x1F3FB..=0x1F3FF | 0x20E3 | 0xE0020..=0xE007F)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Emoji(&'a str),
}

/// Split `text` into plain runs and emoji clusters.
///
/// A cluster is a base emoji plus any modifiers, ZWJ-joined emoji after it,
/// or a regional-indicator pair (a flag).
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_from = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_emoji_base(c) {
            continue;
        }
        let mut end = start + c.len_utf8();
        let mut open_flag = is_regional_indicator(c);

        while let Some(&(i, next)) = chars.peek() {
            if is_emoji_modifier(next) {
                end = i + next.len_utf8();
                chars.next();
            } else if open_flag && is_regional_indicator(next) {
                open_flag = false;
                end = i + next.len_utf8();
                chars.next();
            } else if next == ZWJ {
                chars.next();
                match chars.peek() {
                    Some(&(j, joined)) if is_emoji_base(joined) => {
                        end = j + joined.len_utf8();
                        chars.next();
                    }
                    _ => {
                        end = i + next.len_utf8();
                        break;
                    }
                }
            } else {
                break;
            }
        }

        if plain_from < start {
            out.push(Segment::Text(&text[plain_from..start]));
        }
        out.push(Segment::Emoji(&text[start..end]));
        plain_from = end;
    }

    if plain_from < text.len() {
        out.push(Segment::Text(&text[plain_from..]));
    }
    out
}

/// Distinct emoji clusters in `text`, in order of first appearance.
#[must_use]
pub fn emoji_in(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for segment in segments(text) {
        match segment {
            Segment::Emoji(cluster) if !found.iter().any(|f| f == cluster) => found.push(cluster.to_owned()),
            _ => {}
        }
    }
    found
}

/// Glyph address for `cluster` on a Twemoji-style host: lowercase hex code
/// points joined with `-`. `U+FE0F` is dropped unless the cluster has a ZWJ.
#[must_use]
pub fn emoji_url(endpoint: &str, cluster: &str) -> String {
    let keep_selector = cluster.contains(ZWJ);
    let code = cluster
        .chars()
        .filter(|&c| keep_selector || c != VARIATION_EMOJI)
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-");
    format!("{}/{code}.png", endpoint.trim_end_matches('/'))
}

// =============================================================================
// PDF
// =============================================================================

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 40;
const HEADER_HEIGHT: i64 = 70;
const BODY_SIZE: i64 = 12;
const LINE_GAP: i64 = 6;
const AVATAR_SIZE: i64 = 150;

const AVATAR_XOBJECT: &str = "Av";
const EMOJI_FONT: &str = "FE";
/// Type3 glyph space: one em is 1000 units, with the image sitting on a
/// 200 unit descent so it lines up with the text baseline.
const GLYPH_UNITS: i64 = 1000;
const GLYPH_DESCENT: i64 = -200;

const GOLD: (u8, u8, u8) = (0xFF, 0xD7, 0x00);
const HERO_RED: (u8, u8, u8) = (0xE6, 0x39, 0x46);
const HERO_BLUE: (u8, u8, u8) = (0x1D, 0x35, 0x57);
const WHITE: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Map `text` onto the `WinAnsiEncoding` bytes the standard fonts understand.
/// Characters outside Latin-1 become `?`.
#[must_use]
pub fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| !c.is_control())
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).unwrap_or(b'?'),
            _ => b'?',
        })
        .collect()
}

/// Greedy word wrap by character count. Words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line.is_empty() { word.len() } else { line.chars().count() + 1 + word.len() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Characters per line for Helvetica at `size` across `width` points.
/// Uses an average glyph width of half the font size.
fn chars_per_line(width: i64, size: i64) -> usize {
    usize::try_from(width * 2 / size.max(1)).unwrap_or(1)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Vec<Object> {
    [r, g, b]
        .into_iter()
        .map(|c| Object::Real((f32::from(c) / 255.0).into()))
        .collect()
}

fn font_op(font: &str, size: i64) -> Operation {
    Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()])
}

/// Accumulates drawing operations and starts new pages as needed.
struct PageWriter<'a> {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: i64,
    /// Type3 code for each emoji cluster that has a glyph.
    glyphs: &'a HashMap<String, u8>,
}

impl<'a> PageWriter<'a> {
    fn new(glyphs: &'a HashMap<String, u8>) -> Self {
        let mut writer = Self { pages: Vec::new(), ops: Vec::new(), y: PAGE_HEIGHT, glyphs };
        writer.start_page();
        writer
    }

    fn start_page(&mut self) {
        if !self.ops.is_empty() {
            self.pages.push(std::mem::take(&mut self.ops));
        }
        self.fill_rect(0, 0, PAGE_WIDTH, PAGE_HEIGHT, HERO_BLUE);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: (u8, u8, u8)) {
        self.ops.push(Operation::new("rg", rgb(color)));
        self.ops.push(Operation::new("re", vec![x.into(), y.into(), w.into(), h.into()]));
        self.ops.push(Operation::new("f", vec![]));
    }

    fn ensure_room(&mut self, height: i64) {
        if self.y - height < MARGIN {
            self.start_page();
        }
    }

    /// Draw one line at the cursor and advance it. Emoji with a glyph switch
    /// to the emoji font for the length of the cluster.
    fn line(&mut self, font: &str, size: i64, color: (u8, u8, u8), text: &str) {
        self.ensure_room(size + LINE_GAP);
        self.y -= size;
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(font_op(font, size));
        self.ops.push(Operation::new("rg", rgb(color)));
        self.ops.push(Operation::new("Td", vec![MARGIN.into(), self.y.into()]));

        let mut current = font;
        for segment in segments(text) {
            let (run_font, bytes) = match segment {
                Segment::Text(run) => (font, pdf_text(run)),
                Segment::Emoji(cluster) => match self.glyphs.get(cluster) {
                    Some(&code) => (EMOJI_FONT, vec![code]),
                    None => (font, b"?".to_vec()),
                },
            };
            if run_font != current {
                self.ops.push(font_op(run_font, size));
                current = run_font;
            }
            self.ops.push(Operation::new("Tj", vec![Object::string_literal(bytes)]));
        }

        self.ops.push(Operation::new("ET", vec![]));
        self.y -= LINE_GAP;
    }

    /// Wrapped paragraph.
    fn paragraph(&mut self, font: &str, size: i64, color: (u8, u8, u8), text: &str) {
        for line in wrap(text, chars_per_line(PAGE_WIDTH - 2 * MARGIN, size)) {
            self.line(font, size, color, &line);
        }
    }

    /// Draw the named image XObject as a `size` square, centred.
    fn image(&mut self, name: &str, size: i64) {
        self.ensure_room(size + LINE_GAP);
        self.y -= size;
        let x = (PAGE_WIDTH - size) / 2;
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![size.into(), 0_i64.into(), 0_i64.into(), size.into(), x.into(), self.y.into()],
        ));
        self.ops.push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
        self.ops.push(Operation::new("Q", vec![]));
        self.y -= LINE_GAP;
    }

    fn gap(&mut self, height: i64) {
        self.y -= height;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.ops.is_empty() {
            self.pages.push(self.ops);
        }
        self.pages
    }
}

fn card_operations(user: &User, title: &str, with_avatar: bool, glyphs: &HashMap<String, u8>) -> Vec<Vec<Operation>> {
    let mut w = PageWriter::new(glyphs);

    // Header bar.
    w.fill_rect(0, PAGE_HEIGHT - HEADER_HEIGHT, PAGE_WIDTH, HEADER_HEIGHT, HERO_RED);
    w.fill_rect(0, PAGE_HEIGHT - HEADER_HEIGHT - 4, PAGE_WIDTH, 4, GOLD);
    w.y = PAGE_HEIGHT - 22;
    w.line("F2", 32, GOLD, title);
    w.y = PAGE_HEIGHT - HEADER_HEIGHT - 4 - MARGIN / 2;

    if with_avatar {
        w.image(AVATAR_XOBJECT, AVATAR_SIZE);
        w.gap(6);
    }

    w.paragraph("F2", 24, GOLD, &user.name);
    w.gap(6);

    let tickets = user.tickets_completed.unwrap_or(0).to_string();
    let stats = [
        ("Team", user.team.as_deref().unwrap_or("Unknown")),
        ("Days on Project", user.time_on_project.as_deref().unwrap_or("N/A")),
        ("Tickets Completed", tickets.as_str()),
        ("Favorite Moment", user.favourite_moment.as_deref().unwrap_or("None yet")),
    ];
    for (label, value) in stats {
        w.paragraph("F1", 14, WHITE, &format!("{label}: {value}"));
    }

    w.gap(12);
    w.line("F2", 14, GOLD, "Comments:");
    if user.comments.is_empty() {
        w.line("F1", BODY_SIZE, WHITE, "No heroic messages yet.");
    }
    for comment in &user.comments {
        w.paragraph("F1", BODY_SIZE, WHITE, &format!("{}: {}", comment.author, comment.content));
    }

    w.finish()
}

/// Add `image` as an image XObject, with a soft mask when it has alpha.
fn add_image(doc: &mut Document, image: &PdfImage) -> ObjectId {
    let width = i64::from(image.width);
    let height = i64::from(image.height);
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width,
        "Height" => height,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
    };
    if let Some(alpha) = &image.alpha {
        let mask_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8_i64,
            },
            alpha.clone(),
        ));
        dict.set("SMask", mask_id);
    }
    doc.add_object(Stream::new(dict, image.rgb.clone()))
}

/// Build a Type3 font whose glyphs paint the emoji images. Returns the font
/// and the code assigned to each cluster.
fn add_emoji_font(
    doc: &mut Document,
    emoji: &BTreeMap<String, PdfImage>,
) -> Result<(ObjectId, HashMap<String, u8>), ExportError> {
    let mut codes = HashMap::new();
    let mut char_procs = Dictionary::new();
    let mut xobjects = Dictionary::new();
    let mut differences = vec![Object::Integer(1)];
    let mut widths = Vec::new();

    for (code, (cluster, image)) in (1..=u8::MAX).zip(emoji) {
        let glyph = format!("e{code}");
        let image_id = add_image(doc, image);
        xobjects.set(glyph.as_str(), image_id);

        let procedure = Content {
            operations: vec![
                Operation::new("d0", vec![GLYPH_UNITS.into(), 0_i64.into()]),
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        GLYPH_UNITS.into(),
                        0_i64.into(),
                        0_i64.into(),
                        GLYPH_UNITS.into(),
                        0_i64.into(),
                        GLYPH_DESCENT.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(glyph.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = procedure.encode().map_err(|e| ExportError::Pdf(e.to_string()))?;
        let procedure_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        char_procs.set(glyph.as_str(), procedure_id);

        differences.push(Object::Name(glyph.into_bytes()));
        widths.push(Object::Integer(GLYPH_UNITS));
        codes.insert(cluster.clone(), code);
    }

    let last = i64::try_from(widths.len()).map_err(|e| ExportError::Pdf(e.to_string()))?;
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type3",
        "FontBBox" => vec![
            Object::Integer(0),
            Object::Integer(GLYPH_DESCENT),
            Object::Integer(GLYPH_UNITS),
            Object::Integer(GLYPH_UNITS + GLYPH_DESCENT),
        ],
        "FontMatrix" => vec![
            Object::Real(0.001),
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(0.001),
            Object::Integer(0),
            Object::Integer(0),
        ],
        "CharProcs" => char_procs,
        "Encoding" => dictionary! {
            "Type" => "Encoding",
            "Differences" => differences,
        },
        "FirstChar" => 1_i64,
        "LastChar" => last,
        "Widths" => widths,
        "Resources" => dictionary! {
            "XObject" => xobjects,
        },
    });
    Ok((font_id, codes))
}

/// Render `user`'s card as a PDF document, embedding whatever `assets` holds.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if a content stream cannot be encoded or the
/// document cannot be serialized.
pub fn render_card_pdf(user: &User, title: &str, assets: &CardAssets) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let mut fonts = dictionary! {
        "F1" => regular_id,
        "F2" => bold_id,
    };

    let mut glyphs = HashMap::new();
    if !assets.emoji.is_empty() {
        let (font_id, codes) = add_emoji_font(&mut doc, &assets.emoji)?;
        fonts.set(EMOJI_FONT, font_id);
        glyphs = codes;
    }

    let mut xobjects = Dictionary::new();
    if let Some(avatar) = &assets.avatar {
        let avatar_id = add_image(&mut doc, avatar);
        xobjects.set(AVATAR_XOBJECT, avatar_id);
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
        "XObject" => xobjects,
    });

    let mut kids = Vec::new();
    for operations in card_operations(user, title, assets.avatar.is_some(), &glyphs) {
        let content = Content { operations };
        let encoded = content.encode().map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = i64::try_from(kids.len()).map_err(|e| ExportError::Pdf(e.to_string()))?;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(PAGE_WIDTH), Object::Integer(PAGE_HEIGHT)],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
