// End-to-end checks of each example through the public API.

use std::f64::consts::PI;

use creational_patterns::builder::{
    CharacterBuilder, Director, HeroBuilder, NpcBuilder, NpcDirector, StandardCharacterBuilder,
};
use creational_patterns::database::{self, Backend};
use creational_patterns::dice::DiceRoller;
use creational_patterns::factory_method::{GameObjectFactory, ObjectType};
use creational_patterns::gui::{self, Platform, Widgets};
use creational_patterns::CreationError;

#[test]
fn circle_of_radius_five() {
    let circle = GameObjectFactory::create_object(ObjectType::Circle, 5.0).unwrap();
    assert!((circle.area() - PI * 25.0).abs() < 1e-9);
    assert!((circle.perimeter() - 10.0 * PI).abs() < 1e-9);
    assert_eq!(format!("{:.2}", circle.area()), "78.54");
    assert_eq!(format!("{:.2}", circle.perimeter()), "31.42");
}

#[test]
fn obround_length_against_height() {
    assert!(GameObjectFactory::create_object(ObjectType::Obround, (9.0, 2.0)).is_ok());
    assert!(matches!(
        GameObjectFactory::create_object(ObjectType::Obround, (2.0, 9.0)),
        Err(CreationError::InvalidArgument { .. })
    ));
}

#[test]
fn rectangle_needs_two_sizes() {
    assert!(matches!(
        GameObjectFactory::create_object(ObjectType::Rectangle, 4.0),
        Err(CreationError::UnsupportedShape { arity: 1, .. })
    ));
}

#[test]
fn configured_families_do_not_mix() {
    let platform = Platform::configured();
    let widgets = Widgets::from_factory(gui::factory_for(platform).as_ref());
    assert_eq!(widgets.button.platform(), platform);
    assert_eq!(widgets.menu.platform(), platform);
    assert_eq!(widgets.dialog.platform(), platform);

    let backend = Backend::configured();
    let factory = database::factory_for(backend);
    assert_eq!(factory.create_connection().backend(), backend);
    assert_eq!(factory.create_command().backend(), backend);
}

#[test]
fn hero_from_both_builders() {
    let mut roller = DiceRoller::seeded(1);

    let mut npc_builder = HeroBuilder::new();
    NpcDirector.create_hero(&mut npc_builder, &mut roller);
    let first = npc_builder.get_npc();

    let mut builder = StandardCharacterBuilder::new();
    Director::default()
        .create_hero(&mut builder, &mut roller)
        .unwrap();
    let second = builder.character();

    for hero in [first.as_ref(), second.as_ref()] {
        assert_eq!(hero.name, "Link");
        assert_eq!(hero.health, 3);
        assert_eq!(hero.armor, "Green Tunic");
    }
    assert!((13..=18).contains(&second.abilities.strength));
}
