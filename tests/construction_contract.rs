use creational_idioms::p1_static_factory::{construct, Container, ItemBox};
use creational_idioms::p2_builder::Notebook;
use creational_idioms::p3_singleton::{FactoryMethodSingleton, GuardedSingleton, EAGER_FIELD};
use creational_idioms::p7_drop_safety_net::{Building, WindowLatch};
use creational_idioms::settings::DemoSettings;
use creational_idioms::ConstructionError;

#[test]
fn min_and_max_of_one_two_three() {
    let numbers = [1, 2, 3];
    assert_eq!(*ItemBox::of_minimal_number(&numbers).unwrap().item(), 1);
    assert_eq!(*ItemBox::of_maximum_number(&numbers).unwrap().item(), 3);
}

#[test]
fn empty_numbers_are_an_illegal_argument() {
    let err = ItemBox::of_minimal_number(&[]).unwrap_err();
    assert!(err.is_illegal_argument());
    assert_eq!(err.to_string(), "Should specify at least one argument");
}

#[test]
fn non_letter_is_an_illegal_argument() {
    assert_eq!(ItemBox::of_letter('4').unwrap_err(), ConstructionError::NotALetter('4'));
    assert!(ItemBox::of_letter('A').is_ok());
}

#[test]
fn cached_factories_return_identical_instances() {
    assert!(std::ptr::eq(ItemBox::minimum(), ItemBox::minimum()));
    assert!(std::ptr::eq(
        FactoryMethodSingleton::instance(),
        FactoryMethodSingleton::instance()
    ));
    assert!(std::ptr::eq(&EAGER_FIELD, &EAGER_FIELD));
}

#[test]
fn guarded_singleton_allows_one_instance() {
    let _only = GuardedSingleton::create().expect("first instance");
    assert!(matches!(
        GuardedSingleton::create(),
        Err(ConstructionError::AlreadyInstantiated(_))
    ));
}

#[test]
fn builder_with_required_fields_only() {
    let notebook = Notebook::builder("Intel", "Rosewill", "IntelCore i5").build();
    assert_eq!(
        (notebook.motherboard(), notebook.power_supply(), notebook.cpu()),
        ("Intel", "Rosewill", "IntelCore i5")
    );
    assert!(notebook.computer_case().is_none());
    assert!(notebook.video_card().is_none());
    assert!(notebook.input_device().is_none());
    assert!(notebook.output_device().is_none());
}

#[test]
fn builder_with_every_field() {
    let notebook = Notebook::builder("Intel", "Rosewill", "IntelCore i5")
        .computer_case("Master Box")
        .video_card("GeForce")
        .input_device("Genius")
        .output_device("BenQ")
        .build();
    assert_eq!(notebook.computer_case(), Some("Master Box"));
    assert_eq!(notebook.video_card(), Some("GeForce"));
    assert_eq!(notebook.input_device(), Some("Genius"));
    assert_eq!(notebook.output_device(), Some("BenQ"));
}

#[test]
fn hidden_implementation_behind_container() {
    let container = construct(42u8);
    assert_eq!(*container.item(), 42);
}

#[test]
fn settings_notebook_reaches_builder() {
    let settings = DemoSettings::from_toml(
        r#"
        [notebook]
        motherboard = "Asus"
        power_supply = "Corsair"
        cpu = "Ryzen 7"
        output_device = "LG"
        "#,
    )
    .unwrap();

    let notebook = settings.notebook.unwrap().into_builder().build();
    assert_eq!(notebook.cpu(), "Ryzen 7");
    assert_eq!(notebook.output_device(), Some("LG"));
    assert_eq!(notebook.video_card(), None);
}

#[test]
fn dropping_an_open_building_closes_it() {
    let latch = WindowLatch::new();
    {
        let _building = Building::new("depot", latch.clone());
    }
    assert!(latch.is_closed());
}
