//! The metadata head synchronizer.
//!
//! [`HeadDocument`] models the managed portion of a page's `<head>`:
//! the document title, named meta tags, Open Graph meta tags and the
//! canonical link. Applying a resolved [`PageSeoRecord`] is
//! idempotent per rule — the same record applied twice leaves the
//! model (and its rendered form) byte-identical, with exactly one node
//! per managed tag.
//!
//! [`MetadataSync`] adds the per-target request generation counter: a
//! language or page switch issued while a prior resolution is still in
//! flight must win, so responses for superseded generations are
//! dropped instead of flashing the wrong language.

use crate::model::{Language, PageSeoRecord};

/// Escape a string for use in HTML text or attribute position.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The managed document head model.
///
/// Tag order is insertion order, so repeated applications render
/// byte-identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadDocument {
    title: Option<String>,
    named: Vec<(String, String)>,
    properties: Vec<(String, String)>,
    canonical: Option<String>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Content of a `<meta name="...">` tag, if present.
    pub fn meta_named(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Content of a `<meta property="...">` (Open Graph) tag, if present.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Find-or-create a named meta tag. Empty/absent values are no-ops:
    /// an existing tag is left untouched, never removed.
    fn set_named(&mut self, name: &str, value: Option<&str>) {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return,
        };
        match self.named.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.named.push((name.to_string(), value.to_string())),
        }
    }

    /// Find-or-create an Open Graph meta tag, keyed by `property`.
    fn set_property(&mut self, property: &str, value: Option<&str>) {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return,
        };
        match self.properties.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .properties
                .push((property.to_string(), value.to_string())),
        }
    }

    /// Apply a resolved metadata record.
    ///
    /// `page_url` is the current page's resolved public URL; `og:url`
    /// always reflects it and `og:type` is always `"website"`,
    /// independent of the stored record.
    pub fn apply(&mut self, record: &PageSeoRecord, page_url: &str) {
        if let Some(t) = record.page_title.as_deref() {
            if !t.is_empty() {
                self.title = Some(t.to_string());
            }
        }

        self.set_named("description", record.meta_description.as_deref());
        self.set_named("keywords", record.meta_keywords.as_deref());

        self.set_property("og:title", record.og_title.as_deref());
        self.set_property("og:description", record.og_description.as_deref());
        self.set_property("og:image", record.og_image.as_deref());
        self.set_property("og:type", Some("website"));
        self.set_property("og:url", Some(page_url));

        if let Some(c) = record.canonical_url.as_deref() {
            if !c.is_empty() {
                self.canonical = Some(c.to_string());
            }
        }
    }

    /// Render the managed head fragment as HTML, one line per tag.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(t) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape(t)));
        }
        for (name, value) in &self.named {
            out.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                escape(name),
                escape(value)
            ));
        }
        for (property, value) in &self.properties {
            out.push_str(&format!(
                "<meta property=\"{}\" content=\"{}\">\n",
                escape(property),
                escape(value)
            ));
        }
        if let Some(href) = &self.canonical {
            out.push_str(&format!("<link rel=\"canonical\" href=\"{}\">\n", escape(href)));
        }
        out
    }
}

// ── Stale-response guard ────────────────────────────────────────────

/// Head synchronizer with a request generation counter.
///
/// `begin` registers an in-flight resolution for a `(page_slug,
/// language)` target and returns its generation token; `complete`
/// applies the resolved record only when the token is still current.
/// A target that is already applied and has nothing in flight is
/// skipped entirely — synchronization runs once per target change,
/// not once per render.
#[derive(Debug, Default)]
pub struct MetadataSync {
    head: HeadDocument,
    generation: u64,
    pending: Option<(String, Language)>,
    applied: Option<(String, Language)>,
}

impl MetadataSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a resolution for a target. Returns `None` when the target
    /// is already applied and no newer resolution is in flight.
    pub fn begin(&mut self, page_slug: &str, language: Language) -> Option<u64> {
        let key = (page_slug.to_string(), language);
        if self.pending.is_none() && self.applied.as_ref() == Some(&key) {
            return None;
        }
        self.generation += 1;
        self.pending = Some(key);
        Some(self.generation)
    }

    /// Complete a resolution. Returns `false` (and leaves the head
    /// untouched) when a newer `begin` has superseded this token.
    ///
    /// `record = None` marks the target applied without touching the
    /// head — the caller's own last-resort defaults remain in effect.
    pub fn complete(
        &mut self,
        token: u64,
        record: Option<&PageSeoRecord>,
        page_url: &str,
    ) -> bool {
        if token != self.generation {
            return false;
        }
        self.applied = self.pending.take();
        if let Some(r) = record {
            self.head.apply(r, page_url);
        }
        true
    }

    pub fn head(&self) -> &HeadDocument {
        &self.head
    }
}
