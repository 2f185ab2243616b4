//! Merge engine: positional insertion of template structure into a target
//! sequence, preserving target values.

use crate::error::MergeError;
use crate::line::Line;
use crate::render::render;
use tracing::debug;

/// Merge classified template lines into classified target lines.
///
/// Lines the target already has (matched by identity, not value) keep their
/// target value. Lines it lacks are inserted directly after the position of
/// the previous template line, so template ordering is respected. Inline
/// comments on matched config lines are refreshed from the template.
///
/// The input sequences are not modified; the result is a new sequence built
/// from target lines plus inserted template lines.
pub fn merge(template: &[Line], target: &[Line]) -> Result<Vec<Line>, MergeError> {
    let mut merged: Vec<Line> = target.to_vec();
    for (i, tpl) in template.iter().enumerate() {
        if let Some(at) = position_of(&merged, tpl) {
            reconcile_comment(&mut merged, at, tpl);
            continue;
        }
        let at = if i == 0 {
            0
        } else {
            // template[0..i) are all locatable by induction: each was either
            // matched or inserted in an earlier iteration. A miss here is an
            // internal defect, never a data problem.
            let anchor = &template[i - 1];
            position_of(&merged, anchor).ok_or(MergeError::AnchorNotFound { index: i })? + 1
        };
        debug!(position = at, line = %render(tpl), "inserting template line");
        merged.insert(at, tpl.clone());
    }
    Ok(merged)
}

/// First position in `lines` whose identity equals `needle`'s.
fn position_of(lines: &[Line], needle: &Line) -> Option<usize> {
    let id = needle.id();
    lines.iter().position(|line| line.id() == id)
}

/// Replace the matched line's inline comment with the template's when the
/// template carries one and it differs. The value is never touched; the
/// entry is replaced with a new line rather than edited in place.
fn reconcile_comment(merged: &mut [Line], at: usize, tpl: &Line) {
    let Line::Config {
        inline_comment: Some(new_comment),
        ..
    } = tpl
    else {
        return;
    };
    let Line::Config {
        section,
        key,
        value,
        inline_comment,
    } = merged[at].clone()
    else {
        return;
    };
    if inline_comment.as_deref() == Some(new_comment.as_str()) {
        return;
    }
    debug!(key = %key, "refreshing inline comment from template");
    merged[at] = Line::Config {
        section,
        key,
        value,
        inline_comment: Some(new_comment.clone()),
    };
}
