use crate::pokebase::evolution::{self, Direction, Link, Lookup};
use crate::pokebase::pokemon;
use crate::pokebase::{Database, Pokemon, Session};
use crate::sprite::{Frame, Phase, Sprite};
use crate::widget::{remote_image, secondary};

use iced::task;
use iced::widget::{button, center_x, column, container, horizontal_space, row, scrollable, text};
use iced::{Center, Element, Fill, Task};

pub struct Detail {
    pokemon: Pokemon,
    previous: Option<Link>,
    next: Option<Link>,
    sprite: Phase,
    task: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SpriteFetched(Result<Sprite, anywho::Error>),
    EvolutionChosen(pokemon::Id),
}

pub enum Action {
    None,
    Open(pokemon::Id),
}

impl Detail {
    pub fn new(pokemon: Pokemon, database: &Database, session: &Session) -> (Self, Task<Message>) {
        let lookup = Lookup::new(database.pokemon.values());

        let previous = evolution::resolve(&pokemon, Direction::Previous, &lookup);
        let next = evolution::resolve(&pokemon, Direction::Next, &lookup);

        let (fetch, handle) =
            Task::perform(Sprite::fetch(&pokemon, session), Message::SpriteFetched).abortable();

        (
            Self {
                pokemon,
                previous,
                next,
                sprite: Phase::Loading,
                task: Some(handle.abort_on_drop()),
            },
            fetch,
        )
    }

    pub fn pokemon(&self) -> &Pokemon {
        &self.pokemon
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SpriteFetched(result) => {
                if !self.sprite.is_settled() {
                    self.sprite = Phase::settle(result);
                }

                self.task = None;

                Action::None
            }
            Message::EvolutionChosen(id) => Action::Open(id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pokemon = &self.pokemon;

        let header = row![
            text!("#{}", pokemon.num).size(18).style(secondary),
            horizontal_space(),
            container(text(types(pokemon)).size(14))
                .padding([4, 8])
                .style(container::bordered_box),
        ]
        .align_y(Center);

        let stats = column(
            stats(pokemon)
                .into_iter()
                .map(|stat| text(stat).size(14).into()),
        )
        .spacing(6);

        let content = column![
            center_x(remote_image(Some(&self.sprite), Frame::detail())),
            header,
            stats,
        ]
        .push_maybe(evolution_link(Direction::Previous, self.previous.as_ref()))
        .push_maybe(evolution_link(Direction::Next, self.next.as_ref()))
        .spacing(16)
        .padding(20)
        .max_width(600);

        scrollable(center_x(content)).width(Fill).height(Fill).into()
    }
}

fn evolution_link(direction: Direction, link: Option<&Link>) -> Option<Element<'_, Message>> {
    let link = link?;

    let content: Element<_> = match link {
        Link::Available { evolution, pokemon } => button(
            row![
                text!("#{} {}", evolution.num, evolution.name).size(14),
                horizontal_space(),
                text("›").size(14).style(secondary),
            ]
            .align_y(Center),
        )
        .on_press(Message::EvolutionChosen(pokemon.id))
        .width(Fill)
        .padding([6, 10])
        .style(button::secondary)
        .into(),
        Link::Unavailable => text("Unavailable").size(12).style(secondary).into(),
    };

    Some(
        column![text(direction.to_string()).size(16), content]
            .spacing(6)
            .into(),
    )
}

fn types(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(pokemon::Type::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn stats(pokemon: &Pokemon) -> Vec<String> {
    let mut stats = vec![
        format!("Height: {}", pokemon.height),
        format!("Weight: {}", pokemon.weight),
        format!("Egg: {}", pokemon.egg),
    ];

    stats.push(match pokemon.candy_count {
        Some(count) => format!("Candy: {} ({count} to evolve)", pokemon.candy),
        None => format!("Candy: {}", pokemon.candy),
    });

    stats.push(format!("Spawn Chance: {:.3}", pokemon.spawn_chance));
    stats.push(format!("Avg Spawns: {:.1}", pokemon.avg_spawns));
    stats.push(format!("Spawn Time: {}", pokemon.spawn_time));

    if let Some(multipliers) = &pokemon.multipliers {
        let multipliers: Vec<_> = multipliers
            .iter()
            .map(|multiplier| format!("{multiplier:.2}"))
            .collect();

        stats.push(format!("Multipliers: {}", multipliers.join(", ")));
    }

    stats.push(format!(
        "Weaknesses: {}",
        pokemon
            .weaknesses
            .iter()
            .map(pokemon::Type::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    ));

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    fn open(number: &str) -> (Detail, Database) {
        let database = Database::bundled().unwrap();
        let pokemon = database
            .pokemon
            .values()
            .iter()
            .find(|pokemon| pokemon.num.as_str() == number)
            .unwrap()
            .clone();

        let (detail, _task) = Detail::new(pokemon, &database, &Session::new());

        (detail, database)
    }

    #[test]
    fn resolves_both_evolution_links() {
        let (detail, _database) = open("002");

        let Some(Link::Available { pokemon, .. }) = &detail.previous else {
            panic!("Ivysaur should evolve from Bulbasaur");
        };
        assert_eq!(pokemon.name, "Bulbasaur");

        let Some(Link::Available { pokemon, .. }) = &detail.next else {
            panic!("Ivysaur should evolve into Venusaur");
        };
        assert_eq!(pokemon.name, "Venusaur");
    }

    #[test]
    fn hides_missing_directions() {
        let (detail, _database) = open("150");

        assert_eq!(detail.previous, None);
        assert_eq!(detail.next, None);
    }

    #[test]
    fn choosing_an_evolution_opens_it() {
        let (mut detail, database) = open("133");

        let Some(Link::Available { pokemon, .. }) = detail.next.clone() else {
            panic!("Eevee should evolve");
        };

        assert_eq!(pokemon.name, "Vaporeon");

        let Action::Open(id) = detail.update(Message::EvolutionChosen(pokemon.id)) else {
            panic!("choosing an evolution should open it");
        };

        assert_eq!(database.pokemon.get(&id).map(|target| target.num.as_str()), Some("134"));
    }

    #[test]
    fn sprite_settles_only_once() {
        let (mut detail, _database) = open("025");

        let _ = detail.update(Message::SpriteFetched(Err(anywho::Error::from(
            io::Error::other("offline"),
        ))));

        assert!(matches!(detail.sprite, Phase::Errored));
        assert!(detail.task.is_none());

        let _ = detail.update(Message::SpriteFetched(Err(anywho::Error::from(
            io::Error::other("again"),
        ))));

        assert!(matches!(detail.sprite, Phase::Errored));
    }

    #[test]
    fn formats_stats() {
        let (detail, _database) = open("001");

        let stats = stats(detail.pokemon());

        assert_eq!(stats[0], "Height: 0.71 m");
        assert_eq!(stats[3], "Candy: Bulbasaur Candy (25 to evolve)");
        assert!(stats.contains(&"Spawn Chance: 0.932".to_owned()));
        assert!(stats.contains(&"Avg Spawns: 93.2".to_owned()));
        assert!(stats.contains(&"Multipliers: 1.81".to_owned()));
        assert_eq!(
            stats.last().map(String::as_str),
            Some("Weaknesses: Fire, Ice, Flying, Psychic")
        );
        assert_eq!(types(detail.pokemon()), "Grass, Poison");
    }

    #[test]
    fn omits_missing_multipliers() {
        let (detail, _database) = open("149");

        assert!(
            !stats(detail.pokemon())
                .iter()
                .any(|stat| stat.starts_with("Multipliers"))
        );
    }
}
