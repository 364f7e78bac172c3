use crate::sprite::{Frame, Phase};

use iced::widget::{canvas, center, container, horizontal_space, image, text};
use iced::{Color, ContentFit, Element, Pixels, Theme};

pub fn logo<'a, Message>(size: impl Into<Pixels>) -> Element<'a, Message> {
    text("Pokédex").size(size).into()
}

/// Renders a remote image in whatever phase it is in.
///
/// A missing phase is treated as still loading.
pub fn remote_image<'a, Message: 'a>(
    phase: Option<&'a Phase>,
    frame: Frame,
) -> Element<'a, Message> {
    let placeholder = frame.placeholder;

    let content: Element<'a, Message> = match phase {
        Some(Phase::Loaded(handle)) => {
            let image = image(handle).content_fit(ContentFit::Contain);

            match frame.content {
                Some(size) => image.width(size.width).height(size.height).into(),
                None => image.into(),
            }
        }
        Some(Phase::Errored) => container(horizontal_space())
            .width(placeholder.width)
            .height(placeholder.height)
            .style(|_theme| {
                container::Style::default().background(Color::from_rgb8(128, 128, 128))
            })
            .into(),
        Some(Phase::Loading) | None => {
            let spinner = pokeball(placeholder.width.min(placeholder.height) / 4.0);

            center(spinner)
                .width(placeholder.width)
                .height(placeholder.height)
                .into()
        }
    };

    match frame.max {
        Some(max) => container(content)
            .max_width(max.width)
            .max_height(max.height)
            .into(),
        None => content,
    }
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size};

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let palette = theme.palette();

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&outer_circle, palette.danger);
                frame.fill(&inner_circle, palette.background);
                frame.fill_rectangle(line.position(), line.size(), palette.background);
                frame.fill(&button, palette.text);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}

pub fn secondary(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: Some(palette.background.strong.color),
    }
}
