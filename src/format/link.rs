//! Channel description rendering
//!
//! Substitutes the literal `{{LINK}}` token in a channel description with
//! an HTML anchor. The scope is that single token; this is deliberately not
//! a templating engine.

use crate::models::service_channel::{LINK_PLACEHOLDER, ServiceChannel};
use crate::models::types::LinkTarget;

/// Render a channel's description, substituting `{{LINK}}` with an anchor
/// built from the channel's link fields.
///
/// If either the link URL or the link text is missing the description is
/// returned unchanged, placeholder included. The anchor carries a
/// `target="_blank"` attribute only for new-tab links; the output format
/// (including the space after the href for same-tab links) matches the
/// published markup byte for byte.
#[must_use]
pub fn rendered_description(channel: &ServiceChannel) -> String {
    let (Some(url), Some(text)) = (&channel.link_url, &channel.link_text) else {
        return channel.description.clone();
    };

    // The published markup keeps a space after the href; the target
    // attribute brings its own leading space on top of it
    let target = if channel.link_target == Some(LinkTarget::NewTab) {
        " target=\"_blank\""
    } else {
        ""
    };
    let anchor = format!("<a href=\"{url}\" {target}>{text}</a>");

    channel.description.replace(LINK_PLACEHOLDER, &anchor)
}
