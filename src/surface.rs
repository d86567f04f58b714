use std::collections::BTreeMap;

use crate::{
    config::SliderConfig,
    foundation::error::{MarqueeError, MarqueeResult},
    identity::allocator::AnimationName,
    render::html::{element_to_html, escape_text},
    slider::{Rendered, Slider},
};

/// Handle of a slider mounted on a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

#[derive(Debug)]
struct Mounted {
    slider: Slider,
    rendered: Rendered,
}

/// A page hosting any number of slider instances.
///
/// Each mounted instance contributes one style scope keyed by its animation name; scopes are
/// replaced on re-render and removed on unmount, so instances never share animation rules.
#[derive(Debug, Default)]
pub struct Surface {
    mounts: BTreeMap<MountId, Mounted>,
    styles: BTreeMap<AnimationName, String>,
    next_id: u64,
}

impl Surface {
    /// Empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `slider` and attach it, injecting its style scope.
    ///
    /// Fails if another mounted instance already owns the same animation name.
    pub fn mount(&mut self, mut slider: Slider) -> MarqueeResult<MountId> {
        if self.styles.contains_key(slider.name()) {
            return Err(MarqueeError::mount(format!(
                "animation name '{}' is already in use on this surface",
                slider.name()
            )));
        }

        let rendered = slider.render();
        let id = MountId(self.next_id);
        self.next_id += 1;

        self.styles
            .insert(rendered.style.name.clone(), rendered.style.css.clone());
        tracing::debug!(?id, name = %slider.name(), "mounted slider");
        self.mounts.insert(id, Mounted { slider, rendered });
        Ok(id)
    }

    /// Apply a configuration change and re-render that instance only.
    pub fn update(
        &mut self,
        id: MountId,
        edit: impl FnOnce(&mut SliderConfig),
    ) -> MarqueeResult<&Rendered> {
        let mounted = self.mounts.get_mut(&id).ok_or_else(|| unknown(id))?;
        mounted.slider.update(edit);
        mounted.rendered = mounted.slider.render();
        self.styles.insert(
            mounted.rendered.style.name.clone(),
            mounted.rendered.style.css.clone(),
        );
        Ok(&mounted.rendered)
    }

    /// Latest render of an instance.
    pub fn rendered(&self, id: MountId) -> MarqueeResult<&Rendered> {
        self.get(id).map(|m| &m.rendered)
    }

    /// A mounted instance.
    pub fn slider(&self, id: MountId) -> MarqueeResult<&Slider> {
        self.get(id).map(|m| &m.slider)
    }

    /// Pointer entered an instance's wrapper. Returns whether a handler ran.
    pub fn pointer_enter(&self, id: MountId) -> MarqueeResult<bool> {
        Ok(self.get(id)?.rendered.pointer_enter())
    }

    /// Pointer left an instance's wrapper. Returns whether a handler ran.
    pub fn pointer_leave(&self, id: MountId) -> MarqueeResult<bool> {
        Ok(self.get(id)?.rendered.pointer_leave())
    }

    /// Detach an instance, removing its style scope and dropping its rendered tree.
    pub fn unmount(&mut self, id: MountId) -> MarqueeResult<Slider> {
        let mounted = self.mounts.remove(&id).ok_or_else(|| unknown(id))?;
        self.styles.remove(mounted.slider.name());
        tracing::debug!(?id, name = %mounted.slider.name(), "unmounted slider");
        Ok(mounted.slider)
    }

    /// Injected style scopes, by animation name.
    pub fn style_scopes(&self) -> impl Iterator<Item = (&AnimationName, &str)> {
        self.styles.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Mounted instance ids, in mount order.
    pub fn ids(&self) -> impl Iterator<Item = MountId> + '_ {
        self.mounts.keys().copied()
    }

    /// Number of mounted instances.
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    /// `true` when nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// HTML of every mounted instance, in mount order.
    pub fn to_html(&self) -> String {
        self.mounts
            .values()
            .map(|m| element_to_html(&m.rendered.to_element()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Standalone HTML document wrapping [`Surface::to_html`].
    pub fn to_document(&self, title: &str) -> String {
        let title = escape_text(title);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            self.to_html()
        )
    }

    fn get(&self, id: MountId) -> MarqueeResult<&Mounted> {
        self.mounts.get(&id).ok_or_else(|| unknown(id))
    }
}

fn unknown(id: MountId) -> MarqueeError {
    MarqueeError::mount(format!("no slider mounted with id {}", id.0))
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
