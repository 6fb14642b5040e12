//! In-memory catalog, user, and interaction store
//!
//! The recommendation engine only ever reads snapshots, so the store keeps
//! everything in plain ordered collections: catalog order and interaction
//! arrival order are load-bearing for deterministic tie-breaks.

use uuid::Uuid;

use crate::models::{ActionKind, Interaction, Product, User};

/// Holds all users, products, and interactions for the service
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    products: Vec<Product>,
    interactions: Vec<Interaction>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- users ----

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn user(&self, id: &Uuid) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    // ---- products ----

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn product(&self, id: &Uuid) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Full catalog in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen catalog order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    // ---- interactions ----

    pub fn record_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    /// All interactions for one user, in arrival order
    pub fn interactions_for(&self, user_id: &Uuid) -> Vec<Interaction> {
        self.interactions
            .iter()
            .filter(|interaction| &interaction.user_id == user_id)
            .cloned()
            .collect()
    }

    /// The system-wide interaction log, in arrival order
    pub fn all_interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn interaction_count_for(&self, user_id: &Uuid) -> usize {
        self.interactions
            .iter()
            .filter(|interaction| &interaction.user_id == user_id)
            .count()
    }

    /// Seeds the demo dataset: 4 users, 15 products, 19 interactions
    ///
    /// Skipped when the store already holds users, so restarting the server
    /// does not duplicate data.
    pub fn seed_demo_data(&mut self) {
        if !self.users.is_empty() {
            tracing::info!("Store already contains data, skipping seed");
            return;
        }

        let alice = User::new("Alice Johnson".to_string());
        let bob = User::new("Bob Smith".to_string());
        let charlie = User::new("Charlie Brown".to_string());
        let diana = User::new("Diana Prince".to_string());

        let mouse = demo_product(
            "Wireless Mouse",
            "Electronics",
            29.99,
            "Ergonomic wireless mouse with long battery life",
            &["electronics", "computer", "wireless", "accessories"],
        );
        let keyboard = demo_product(
            "Mechanical Keyboard",
            "Electronics",
            89.99,
            "RGB mechanical gaming keyboard",
            &["electronics", "computer", "gaming", "keyboard"],
        );
        let hub = demo_product(
            "USB-C Hub",
            "Electronics",
            45.99,
            "7-in-1 USB-C hub with HDMI and card reader",
            &["electronics", "computer", "accessories", "usb"],
        );
        let laptop_stand = demo_product(
            "Laptop Stand",
            "Accessories",
            35.99,
            "Adjustable aluminum laptop stand",
            &["accessories", "laptop", "desk", "ergonomic"],
        );
        let speaker = demo_product(
            "Bluetooth Speaker",
            "Electronics",
            59.99,
            "Portable waterproof Bluetooth speaker",
            &["electronics", "audio", "bluetooth", "portable"],
        );
        let headphones = demo_product(
            "Noise Cancelling Headphones",
            "Electronics",
            199.99,
            "Premium over-ear headphones with active noise cancellation",
            &["electronics", "audio", "headphones", "noise-cancelling"],
        );
        let webcam = demo_product(
            "Webcam 1080p",
            "Electronics",
            79.99,
            "Full HD webcam with auto-focus",
            &["electronics", "camera", "video", "streaming"],
        );
        let phone_stand = demo_product(
            "Phone Stand",
            "Accessories",
            15.99,
            "Adjustable phone holder for desk",
            &["accessories", "phone", "desk", "holder"],
        );
        let lamp = demo_product(
            "LED Desk Lamp",
            "Home",
            39.99,
            "Dimmable LED desk lamp with USB charging port",
            &["home", "lighting", "desk", "led"],
        );
        let charger = demo_product(
            "Wireless Charger",
            "Electronics",
            24.99,
            "Fast wireless charging pad for phones",
            &["electronics", "charging", "wireless", "phone"],
        );
        let mouse_pad = demo_product(
            "Gaming Mouse Pad",
            "Accessories",
            19.99,
            "Large RGB gaming mouse pad",
            &["accessories", "gaming", "mouse", "rgb"],
        );
        let ssd = demo_product(
            "Portable SSD 1TB",
            "Electronics",
            129.99,
            "Ultra-fast portable solid state drive",
            &["electronics", "storage", "ssd", "portable"],
        );
        let cable_kit = demo_product(
            "Cable Management Kit",
            "Accessories",
            12.99,
            "Complete cable organizer set",
            &["accessories", "cable", "organization", "desk"],
        );
        let monitor_arm = demo_product(
            "Monitor Arm",
            "Accessories",
            69.99,
            "Adjustable monitor mount arm",
            &["accessories", "monitor", "desk", "ergonomic"],
        );
        let earbuds = demo_product(
            "Wireless Earbuds",
            "Electronics",
            79.99,
            "True wireless earbuds with charging case",
            &["electronics", "audio", "earbuds", "wireless"],
        );

        let interactions = vec![
            // Alice - interested in audio products
            Interaction::new(alice.id, speaker.id, ActionKind::View),
            Interaction::new(alice.id, headphones.id, ActionKind::View),
            Interaction::new(alice.id, speaker.id, ActionKind::Purchase),
            Interaction::new(alice.id, earbuds.id, ActionKind::View),
            // Bob - computer accessories enthusiast
            Interaction::new(bob.id, mouse.id, ActionKind::View),
            Interaction::new(bob.id, keyboard.id, ActionKind::View),
            Interaction::new(bob.id, mouse.id, ActionKind::Purchase),
            Interaction::new(bob.id, mouse_pad.id, ActionKind::View),
            Interaction::new(bob.id, mouse_pad.id, ActionKind::Purchase),
            Interaction::new(bob.id, laptop_stand.id, ActionKind::View),
            // Charlie - setting up home office
            Interaction::new(charlie.id, laptop_stand.id, ActionKind::View),
            Interaction::new(charlie.id, lamp.id, ActionKind::View),
            Interaction::new(charlie.id, lamp.id, ActionKind::Purchase),
            Interaction::new(charlie.id, monitor_arm.id, ActionKind::View),
            Interaction::new(charlie.id, webcam.id, ActionKind::View),
            // Diana - mobile accessories
            Interaction::new(diana.id, phone_stand.id, ActionKind::View),
            Interaction::new(diana.id, charger.id, ActionKind::View),
            Interaction::new(diana.id, charger.id, ActionKind::Purchase),
            Interaction::new(diana.id, earbuds.id, ActionKind::View),
        ];

        self.users = vec![alice, bob, charlie, diana];
        self.products = vec![
            mouse,
            keyboard,
            hub,
            laptop_stand,
            speaker,
            headphones,
            webcam,
            phone_stand,
            lamp,
            charger,
            mouse_pad,
            ssd,
            cable_kit,
            monitor_arm,
            earbuds,
        ];
        self.interactions = interactions;

        tracing::info!(
            users = self.users.len(),
            products = self.products.len(),
            interactions = self.interactions.len(),
            "Demo catalog seeded"
        );
    }
}

fn demo_product(
    name: &str,
    category: &str,
    price: f64,
    description: &str,
    tags: &[&str],
) -> Product {
    Product::new(
        name.to_string(),
        category.to_string(),
        price,
        description.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = Store::new();
        assert!(store.users().is_empty());
        assert!(store.products().is_empty());
        assert!(store.all_interactions().is_empty());
    }

    #[test]
    fn test_seed_demo_data_counts() {
        let mut store = Store::new();
        store.seed_demo_data();
        assert_eq!(store.users().len(), 4);
        assert_eq!(store.products().len(), 15);
        assert_eq!(store.all_interactions().len(), 19);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut store = Store::new();
        store.seed_demo_data();
        store.seed_demo_data();
        assert_eq!(store.users().len(), 4);
        assert_eq!(store.products().len(), 15);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut store = Store::new();
        store.seed_demo_data();
        assert_eq!(store.categories(), vec!["Electronics", "Accessories", "Home"]);
    }

    #[test]
    fn test_interactions_for_preserves_arrival_order() {
        let mut store = Store::new();
        store.seed_demo_data();

        let alice = store.users()[0].clone();
        let interactions = store.interactions_for(&alice.id);
        assert_eq!(interactions.len(), 4);
        assert_eq!(interactions[0].action, ActionKind::View);
        assert_eq!(interactions[2].action, ActionKind::Purchase);
    }

    #[test]
    fn test_interaction_count_for() {
        let mut store = Store::new();
        store.seed_demo_data();

        let bob = store.users()[1].clone();
        assert_eq!(store.interaction_count_for(&bob.id), 6);
        assert_eq!(store.interaction_count_for(&Uuid::new_v4()), 0);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut store = Store::new();
        let product = demo_product("Widget", "Other", 1.0, "", &[]);
        let id = product.id;
        store.add_product(product);

        assert!(store.product(&id).is_some());
        assert!(store.product(&Uuid::new_v4()).is_none());
    }
}
