//! Media components: audio, video and image. Pass-through value bags with no
//! validation.

use crate::attributes::HtmlAttributes;
use crate::config::Family;
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::resolver::{component_id, Component, Content, Overrides, Styled, ValueBag};

fn resolve_media(
    ctx: &RenderContext<'_>,
    overrides: &Overrides,
    component_type: &str,
    content: impl FnOnce(Option<String>) -> Content,
) -> ComponentResult<ValueBag> {
    let config = ctx.config.component(&Family::Media.path(component_type))?;
    let id = component_id(Family::Media, component_type);

    Ok(ValueBag {
        view: config.view.clone(),
        family: Family::Media,
        component_type: component_type.to_string(),
        name: None,
        icon: None,
        label: None,
        legend: None,
        classes: overrides.resolve_classes(&config, &id),
        html_attributes: overrides.resolve_attributes(&config),
        validation: None,
        content: content(config.poster.clone()),
        id,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Audio {
    overrides: Overrides,
    src: Option<String>,
}

impl Audio {
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }
}

impl Component for Audio {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        resolve_media(ctx, &self.overrides, "audio", |_| Content::Audio {
            src: self.src.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Video {
    overrides: Overrides,
    src: Option<String>,
    poster: Option<String>,
}

impl Video {
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Replaces the configured poster
    pub fn poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }
}

impl Component for Video {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        resolve_media(ctx, &self.overrides, "video", |configured| Content::Video {
            src: self.src.clone(),
            poster: self.poster.clone().or(configured),
        })
    }
}

/// Image, optionally wrapped in a link with its own class and attribute slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    overrides: Overrides,
    src: Option<String>,
    alt: Option<String>,
    link: Option<String>,
}

impl Image {
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Wrap the image in `<a href="url">`
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Replace the configured link classes
    pub fn link_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.classes.link = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the configured link attributes
    pub fn link_html_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.overrides.attributes.link = Some(attributes);
        self
    }
}

impl Component for Image {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        resolve_media(ctx, &self.overrides, "image", |_| Content::Image {
            src: self.src.clone(),
            alt: self.alt.clone(),
            link: self.link.clone(),
        })
    }
}

macro_rules! styled {
    ($($component:ty),+) => {$(
        impl Styled for $component {
            fn overrides_mut(&mut self) -> &mut Overrides {
                &mut self.overrides
            }
        }
    )+};
}

styled!(Audio, Video, Image);

pub fn audio() -> Audio {
    Audio::default()
}

pub fn video() -> Video {
    Video::default()
}

pub fn image() -> Image {
    Image::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn video_poster_falls_back_to_config() {
        let mut store = ConfigStore::bundled();
        store.set("media.video.poster", "/default.jpg");
        let ctx = RenderContext::new(&store);

        let bag = video().src("/clip.mp4").resolve(&ctx).unwrap();
        assert_eq!(
            bag.content,
            Content::Video {
                src: Some("/clip.mp4".to_string()),
                poster: Some("/default.jpg".to_string()),
            }
        );

        let bag = video().poster("/custom.jpg").resolve(&ctx).unwrap();
        assert!(matches!(
            bag.content,
            Content::Video { poster: Some(ref poster), .. } if poster == "/custom.jpg"
        ));
    }

    #[test]
    fn image_link_slot() {
        let store = ConfigStore::bundled();
        let bag = image()
            .src("/a.png")
            .link("/a")
            .link_class(["lightbox"])
            .resolve(&RenderContext::new(&store))
            .unwrap();
        assert_eq!(
            bag.classes.link,
            vec!["media-image-link".to_string(), "lightbox".to_string()]
        );
        assert_eq!(bag.id, "media-image");
    }
}
