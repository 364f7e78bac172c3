use pokebase;

mod screen;
mod sprite;
mod widget;

use crate::pokebase::{Database, Session};
use crate::screen::{Detail, Grid, detail, grid};
use crate::widget::logo;

use iced::keyboard;
use iced::widget::{button, center, column, container, horizontal_space, row, text};
use iced::{Center, Element, Fill, Font, Subscription, Task, Theme};

use function::Binary;
use std::env;
use std::path::PathBuf;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .default_font(Font::MONOSPACE)
        .window_size((1024.0, 768.0))
        .run()
}

struct Pokedex {
    state: State,
}

enum State {
    Loading,
    Failed(pokebase::Error),
    Ready {
        database: Database,
        session: Session,
        grid: Grid,
        stack: Vec<Detail>,
    },
}

#[derive(Debug, Clone)]
enum Message {
    Loaded(pokebase::Result<Database>),
    Grid(grid::Message),
    Detail(usize, detail::Message),
    Back,
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let load = match env::var_os("POKEDEX_DATA") {
            Some(path) => Task::perform(Database::load_from(PathBuf::from(path)), Message::Loaded),
            None => Task::perform(Database::load(), Message::Loaded),
        };

        (
            Self {
                state: State::Loading,
            },
            load,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(database)) => {
                self.state = State::Ready {
                    grid: Grid::new(&database),
                    database,
                    session: Session::new(),
                    stack: Vec::new(),
                };

                Task::none()
            }
            Message::Loaded(Err(error)) => {
                log::error!("{error}");

                self.state = State::Failed(error);

                Task::none()
            }
            Message::Grid(message) => {
                let State::Ready {
                    database,
                    session,
                    grid,
                    stack,
                } = &mut self.state
                else {
                    return Task::none();
                };

                match grid.update(message, database, session) {
                    grid::Action::None => Task::none(),
                    grid::Action::Run(task) => task.map(Message::Grid),
                    grid::Action::Open(id) => open(id, database, session, stack),
                }
            }
            Message::Detail(depth, message) => {
                let State::Ready {
                    database,
                    session,
                    stack,
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                let Some(detail) = stack.get_mut(depth) else {
                    return Task::none();
                };

                match detail.update(message) {
                    detail::Action::None => Task::none(),
                    detail::Action::Open(id) => {
                        stack.truncate(depth + 1);

                        open(id, database, session, stack)
                    }
                }
            }
            Message::Back => {
                if let State::Ready { stack, .. } = &mut self.state {
                    let _ = stack.pop();
                }

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.state {
            State::Loading => center(text("Loading Pokédex...")).into(),
            State::Failed(error) => center(
                container(
                    column![
                        text("The Pokédex could not be loaded").size(20),
                        text(error.to_string()).size(14),
                    ]
                    .spacing(10)
                    .align_x(Center),
                )
                .padding(20)
                .style(container::bordered_box),
            )
            .into(),
            State::Ready {
                database,
                grid,
                stack,
                ..
            } => {
                let (title, screen): (Element<'_, Message>, _) = match stack.last() {
                    Some(detail) => (
                        text(detail.pokemon().name.as_str()).size(20).into(),
                        detail
                            .view()
                            .map(Message::Detail.with(stack.len() - 1)),
                    ),
                    None => (logo(20), grid.view(database).map(Message::Grid)),
                };

                let back = (!stack.is_empty()).then(|| {
                    button(text("‹ Back").size(14))
                        .on_press(Message::Back)
                        .padding([5, 10])
                        .style(button::text)
                });

                let navbar = container(
                    row![]
                        .push_maybe(back)
                        .push(title)
                        .push(horizontal_space())
                        .spacing(10)
                        .width(Fill)
                        .align_y(Center),
                )
                .padding([5, 10])
                .style(container::dark);

                column![navbar, container(screen).height(Fill)].into()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let State::Ready { stack, .. } = &self.state else {
            return Subscription::none();
        };

        if stack.is_empty() {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| {
            use keyboard::key::{Key, Named};

            match key.as_ref() {
                Key::Named(Named::Escape) => Some(Message::Back),
                _ => None,
            }
        })
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}

fn open(
    id: pokebase::pokemon::Id,
    database: &Database,
    session: &Session,
    stack: &mut Vec<Detail>,
) -> Task<Message> {
    let Some(pokemon) = database.pokemon.get(&id) else {
        log::warn!("Pokémon #{} is not in the Pokédex", id.value());

        return Task::none();
    };

    let (detail, task) = Detail::new(pokemon.clone(), database, session);
    let depth = stack.len();

    stack.push(detail);

    task.map(Message::Detail.with(depth))
}
