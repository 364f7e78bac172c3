use crate::pokebase::pokemon;
use crate::pokebase::{Pokemon, Session};

use bytes::Bytes;
use iced::Size;
use iced::widget::image;
use std::fmt;
use std::io;
use tokio::task;

/// A decoded RGBA sprite, ready to be turned into an image handle.
#[derive(Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Sprite {
    pub fn fetch<'a>(
        pokemon: &Pokemon,
        session: &Session,
    ) -> impl Future<Output = Result<Sprite, anywho::Error>> + 'a {
        let pokemon = pokemon.clone();
        let session = session.clone();

        async move {
            let image = pokemon::Image::download(&pokemon, &session).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || {
                let image = ::image::ImageReader::new(io::Cursor::new(image.bytes))
                    .with_guessed_format()?
                    .decode()?
                    .to_rgba8();

                Ok(Sprite {
                    width: image.width(),
                    height: image.height(),
                    rgba: Bytes::from(image.into_raw()),
                })
            })
            .await?
        }
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}

/// The lifecycle of a remote image within a single view.
///
/// A view starts out `Loading` and settles once; there is no way back.
pub enum Phase {
    Loading,
    Loaded(image::Handle),
    Errored,
}

impl Phase {
    pub fn settle(result: Result<Sprite, anywho::Error>) -> Self {
        match result {
            Ok(sprite) => Phase::Loaded(image::Handle::from_rgba(
                sprite.width,
                sprite.height,
                sprite.rgba,
            )),
            Err(error) => {
                log::error!("{error}");

                Phase::Errored
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Phase::Loading)
    }
}

/// How much room a remote image may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub content: Option<Size>,
    pub max: Option<Size>,
    pub placeholder: Size,
}

impl Frame {
    pub fn thumbnail() -> Self {
        Self {
            content: Some(Size::new(80.0, 80.0)),
            max: None,
            placeholder: Size::new(80.0, 80.0),
        }
    }

    pub fn detail() -> Self {
        Self {
            content: None,
            max: Some(Size::new(300.0, 300.0)),
            placeholder: Size::new(300.0, 300.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_settle_once_fetched() {
        let sprite = Sprite {
            width: 1,
            height: 1,
            rgba: Bytes::from_static(&[0, 0, 0, 255]),
        };

        assert!(!Phase::Loading.is_settled());
        assert!(matches!(Phase::settle(Ok(sprite)), Phase::Loaded(_)));
    }

    #[test]
    fn frames_fit_their_views() {
        let thumbnail = Frame::thumbnail();
        let detail = Frame::detail();

        assert_eq!(thumbnail.content, Some(thumbnail.placeholder));
        assert_eq!(detail.content, None);
        assert_eq!(detail.max, Some(detail.placeholder));
    }
}
