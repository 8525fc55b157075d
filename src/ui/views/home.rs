// SPDX-License-Identifier: MPL-2.0
//! Home view: a card with a small user table.
//!
//! Display only. Row editing lives outside this shell's scope.

use crate::ui::design_tokens::spacing;
use crate::ui::styles::{self, ShellPalette};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug)]
pub struct State {
    rows: Vec<Person>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            rows: vec![
                Person {
                    name: "Alice".into(),
                    age: 25,
                },
                Person {
                    name: "Bob".into(),
                    age: 30,
                },
                Person {
                    name: "Charlie".into(),
                    age: 35,
                },
            ],
        }
    }
}

impl State {
    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    pub fn view<'a, M: 'a>(&'a self, palette: ShellPalette) -> Element<'a, M> {
        let mut table = Column::new().spacing(spacing::XXS).push(
            Row::new()
                .push(Text::new("Name").size(14).width(Length::FillPortion(2)))
                .push(Text::new("Age").size(14).width(Length::FillPortion(1))),
        );

        for person in &self.rows {
            table = table.push(
                Row::new()
                    .push(
                        Text::new(person.name.as_str())
                            .size(14)
                            .width(Length::FillPortion(2)),
                    )
                    .push(
                        Text::new(person.age.to_string())
                            .size(14)
                            .width(Length::FillPortion(1)),
                    ),
            );
        }

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new("User Information").size(16))
                .push(table),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card(palette));

        Column::new().padding(spacing::SM).push(card).into()
    }
}
