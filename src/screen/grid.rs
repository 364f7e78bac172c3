use crate::pokebase::pokemon;
use crate::pokebase::{Database, Filter, Pokemon, Session};
use crate::sprite::{Frame, Phase, Sprite};
use crate::widget::remote_image;

use iced::widget::{
    button, center, column, container, grid, horizontal_space, pick_list, pop, row, scrollable,
    text,
};
use iced::{Center, Element, Fill, Task};

use function::Binary;
use std::collections::HashMap;

pub struct Grid {
    filters: Vec<Filter>,
    filter: Filter,
    sprites: HashMap<pokemon::Id, Phase>,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Filter),
    CardShown(pokemon::Id),
    CardChosen(pokemon::Id),
    SpriteFetched(pokemon::Id, Result<Sprite, anywho::Error>),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Open(pokemon::Id),
}

impl Grid {
    pub fn new(database: &Database) -> Self {
        Self {
            filters: Filter::options(database.pokemon.values()),
            filter: Filter::All,
            sprites: HashMap::new(),
        }
    }

    pub fn update(&mut self, message: Message, database: &Database, session: &Session) -> Action {
        match message {
            Message::FilterSelected(filter) => {
                log::debug!("Filtering by {filter}");
                self.filter = filter;

                Action::None
            }
            Message::CardShown(id) => {
                if self.sprites.contains_key(&id) {
                    return Action::None;
                }

                let Some(pokemon) = database.pokemon.get(&id) else {
                    return Action::None;
                };

                let _ = self.sprites.insert(id, Phase::Loading);

                Action::Run(Task::perform(
                    Sprite::fetch(pokemon, session),
                    Message::SpriteFetched.with(id),
                ))
            }
            Message::CardChosen(id) => {
                // Thumbnails are fetched again once the grid is shown again
                self.sprites.clear();

                Action::Open(id)
            }
            Message::SpriteFetched(id, result) => {
                if let Some(sprite) = self.sprites.get_mut(&id) {
                    *sprite = Phase::settle(result);
                }

                Action::None
            }
        }
    }

    pub fn visible<'a>(&'a self, database: &'a Database) -> impl Iterator<Item = &'a Pokemon> {
        self.filter.apply(database.pokemon.values())
    }

    pub fn view<'a>(&'a self, database: &'a Database) -> Element<'a, Message> {
        let total = self.visible(database).count();

        let header = row![
            text!("{total} Pokémon").size(14),
            horizontal_space(),
            text("Type").size(14),
            pick_list(
                self.filters.as_slice(),
                Some(self.filter.clone()),
                Message::FilterSelected
            )
            .padding([5, 10])
            .text_size(14),
        ]
        .spacing(10)
        .align_y(Center);

        let content: Element<_> = if total == 0 {
            center(
                container(text!("No Pokémon match the {filter} type", filter = self.filter))
                    .padding(10)
                    .style(container::bordered_box),
            )
            .into()
        } else {
            scrollable(
                grid(
                    self.visible(database)
                        .map(|pokemon| card(pokemon, self.sprites.get(&pokemon.id))),
                )
                .fluid(140)
                .height(grid::aspect_ratio(100, 130))
                .spacing(12),
            )
            .width(Fill)
            .height(Fill)
            .spacing(10)
            .into()
        };

        column![header, content].spacing(10).padding(10).into()
    }
}

fn card<'a>(pokemon: &'a Pokemon, sprite: Option<&'a Phase>) -> Element<'a, Message> {
    let content = column![
        remote_image(sprite, Frame::thumbnail()),
        text(pokemon.name.as_str()).size(14).center().width(Fill),
    ]
    .spacing(8)
    .align_x(Center);

    let card = button(
        container(content)
            .padding(10)
            .width(Fill)
            .height(Fill)
            .style(container::bordered_box),
    )
    .on_press(Message::CardChosen(pokemon.id))
    .padding(0)
    .style(button::text);

    pop(card)
        .key(pokemon.num.as_str())
        .on_show(move |_size| Message::CardShown(pokemon.id))
        .into()
}
