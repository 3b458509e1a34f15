//! Client-side refinement of fetched collections.
//!
//! One parametrized abstraction — [`ListQuery`]: ordered predicate
//! filters, an optional comparator, an optional visible-count prefix —
//! instantiated with the room/gallery/menu vocabularies below. The rooms
//! page composes all three stages; gallery and menu only filter.

use std::cmp::Ordering;

use api::{Room, RoomKind};

/// Rooms shown before the first "see more" click.
pub const INITIAL_VISIBLE: usize = 6;
/// Rooms added per "see more" click.
pub const VISIBLE_STEP: usize = 3;

pub struct ListQuery<T> {
    filters: Vec<Box<dyn Fn(&T) -> bool>>,
    comparator: Option<Box<dyn Fn(&T, &T) -> Ordering>>,
    take: Option<usize>,
}

impl<T: Clone> ListQuery<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            comparator: None,
            take: None,
        }
    }

    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    pub fn sort_by(mut self, comparator: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    pub fn take(mut self, count: usize) -> Self {
        self.take = Some(count);
        self
    }

    pub fn apply(&self, items: &[T]) -> Vec<T> {
        let mut out: Vec<T> = items
            .iter()
            .filter(|item| self.filters.iter().all(|f| f(item)))
            .cloned()
            .collect();
        if let Some(cmp) = &self.comparator {
            // Stable sort: equal elements keep their fetch order.
            out.sort_by(|a, b| cmp(a, b));
        }
        if let Some(count) = self.take {
            out.truncate(count);
        }
        out
    }
}

impl<T: Clone> Default for ListQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps items whose category slug matches, or everything when `category`
/// is `None` ("all").
pub fn filter_by_category<T, F>(items: &[T], category: Option<&str>, key: F) -> Vec<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> &str + 'static,
{
    let Some(slug) = category else {
        return items.to_vec();
    };
    let slug = slug.to_string();
    ListQuery::new()
        .filter(move |item: &T| key(item) == slug)
        .apply(items)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    Under50k,
    From50kTo100k,
    From100kTo150k,
    Over150k,
}

impl PriceBand {
    pub const ALL: [PriceBand; 5] = [
        PriceBand::All,
        PriceBand::Under50k,
        PriceBand::From50kTo100k,
        PriceBand::From100kTo150k,
        PriceBand::Over150k,
    ];

    /// `<select>` option value.
    pub fn value(self) -> &'static str {
        match self {
            PriceBand::All => "all",
            PriceBand::Under50k => "under-50k",
            PriceBand::From50kTo100k => "50k-100k",
            PriceBand::From100kTo150k => "100k-150k",
            PriceBand::Over150k => "over-150k",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        match raw {
            "under-50k" => PriceBand::Under50k,
            "50k-100k" => PriceBand::From50kTo100k,
            "100k-150k" => PriceBand::From100kTo150k,
            "over-150k" => PriceBand::Over150k,
            _ => PriceBand::All,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PriceBand::All => "filter-price-all",
            PriceBand::Under50k => "filter-price-under-50k",
            PriceBand::From50kTo100k => "filter-price-50k-100k",
            PriceBand::From100kTo150k => "filter-price-100k-150k",
            PriceBand::Over150k => "filter-price-over-150k",
        }
    }

    pub fn matches(self, price: f64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::Under50k => price < 50_000.0,
            PriceBand::From50kTo100k => (50_000.0..=100_000.0).contains(&price),
            PriceBand::From100kTo150k => price > 100_000.0 && price <= 150_000.0,
            PriceBand::Over150k => price > 150_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestBand {
    #[default]
    Any,
    Solo,
    UpToTwo,
    ThreeToFour,
    FivePlus,
}

impl GuestBand {
    pub const ALL: [GuestBand; 5] = [
        GuestBand::Any,
        GuestBand::Solo,
        GuestBand::UpToTwo,
        GuestBand::ThreeToFour,
        GuestBand::FivePlus,
    ];

    pub fn value(self) -> &'static str {
        match self {
            GuestBand::Any => "any",
            GuestBand::Solo => "1",
            GuestBand::UpToTwo => "2",
            GuestBand::ThreeToFour => "3",
            GuestBand::FivePlus => "5",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        match raw {
            "1" => GuestBand::Solo,
            "2" => GuestBand::UpToTwo,
            "3" => GuestBand::ThreeToFour,
            "5" => GuestBand::FivePlus,
            _ => GuestBand::Any,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            GuestBand::Any => "filter-guests-any",
            GuestBand::Solo => "filter-guests-1",
            GuestBand::UpToTwo => "filter-guests-2",
            GuestBand::ThreeToFour => "filter-guests-3-4",
            GuestBand::FivePlus => "filter-guests-5",
        }
    }

    pub fn matches(self, guests: u32) -> bool {
        match self {
            GuestBand::Any => true,
            GuestBand::Solo => guests == 1,
            GuestBand::UpToTwo => guests <= 2,
            GuestBand::ThreeToFour => (3..=4).contains(&guests),
            GuestBand::FivePlus => guests >= 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Fetch order, untouched.
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Rating,
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Popular,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Size,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Rating => "rating",
            SortKey::Size => "size",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        match raw {
            "price_low" => SortKey::PriceLow,
            "price_high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "size" => SortKey::Size,
            _ => SortKey::Popular,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SortKey::Popular => "sort-popular",
            SortKey::PriceLow => "sort-price-low",
            SortKey::PriceHigh => "sort-price-high",
            SortKey::Rating => "sort-rating",
            SortKey::Size => "sort-size",
        }
    }

    fn comparator(self) -> Option<fn(&Room, &Room) -> Ordering> {
        match self {
            SortKey::Popular => None,
            SortKey::PriceLow => Some(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHigh => Some(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Rating => Some(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Size => Some(|a, b| b.size.total_cmp(&a.size)),
        }
    }
}

/// The rooms-page refinement: three predicate filters plus a sort.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoomQuery {
    pub price: PriceBand,
    pub guests: GuestBand,
    pub kind: Option<RoomKind>,
    pub sort: SortKey,
}

impl RoomQuery {
    pub fn apply(&self, rooms: &[Room]) -> Vec<Room> {
        let price = self.price;
        let guests = self.guests;
        let kind = self.kind;
        let query = ListQuery::new()
            .filter(move |room: &Room| price.matches(room.price))
            .filter(move |room: &Room| guests.matches(room.max_guests))
            .filter(move |room: &Room| kind.map_or(true, |k| room.kind() == k));
        match self.sort.comparator() {
            Some(cmp) => query.sort_by(cmp).apply(rooms),
            None => query.apply(rooms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rooms built through serde so the test exercises the same path the
    // client does, string numerics included.
    fn room(id: u64, price: f64, guests: u32, kind: &str, rating: f64, size: f64) -> Room {
        let raw = format!(
            r#"{{
                "id": {id},
                "name": "Room {id}",
                "slug": "room-{id}",
                "price": "{price:.2}",
                "max_guests": {guests},
                "room_type": "{kind}",
                "rating": "{rating:.2}",
                "size": {size}
            }}"#
        );
        serde_json::from_str(&raw).expect("test room decodes")
    }

    fn sample() -> Vec<Room> {
        vec![
            room(1, 150_000.0, 2, "suite", 4.8, 42.0),
            room(2, 85_000.0, 2, "double", 4.6, 28.0),
            room(3, 120_000.0, 4, "family", 4.7, 45.0),
            room(4, 75_000.0, 2, "twin", 4.4, 26.0),
            room(5, 180_000.0, 6, "bungalow", 4.9, 68.0),
            room(6, 40_000.0, 2, "standard", 0.0, 12.0),
        ]
    }

    #[test]
    fn price_bands_partition_correctly() {
        let rooms = sample();

        let under = RoomQuery {
            price: PriceBand::Under50k,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(under.iter().all(|r| r.price < 50_000.0));
        assert_eq!(under.len(), 1);

        let mid = RoomQuery {
            price: PriceBand::From50kTo100k,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(mid.iter().all(|r| (50_000.0..=100_000.0).contains(&r.price)));
        assert_eq!(mid.len(), 2);

        let upper = RoomQuery {
            price: PriceBand::From100kTo150k,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(upper
            .iter()
            .all(|r| r.price > 100_000.0 && r.price <= 150_000.0));
        assert_eq!(upper.len(), 2);

        let top = RoomQuery {
            price: PriceBand::Over150k,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(top.iter().all(|r| r.price > 150_000.0));
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn guest_bands_respect_capacity() {
        let rooms = sample();

        let pairs = RoomQuery {
            guests: GuestBand::UpToTwo,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(pairs.iter().all(|r| r.max_guests <= 2));

        let groups = RoomQuery {
            guests: GuestBand::FivePlus,
            ..Default::default()
        }
        .apply(&rooms);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, 5);
    }

    #[test]
    fn the_forty_thousand_franc_standard_room() {
        // Worked example: string "40000.00" normalizes to 40000.0, lands
        // in under-50k, and is excluded by the 5+ guest band.
        let rooms = sample();
        let under = RoomQuery {
            price: PriceBand::Under50k,
            ..Default::default()
        }
        .apply(&rooms);
        assert_eq!(under[0].id, 6);
        assert_eq!(under[0].price, 40_000.0);
        assert_eq!(under[0].rating, 0.0);

        let groups = RoomQuery {
            guests: GuestBand::FivePlus,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(groups.iter().all(|r| r.id != 6));
    }

    #[test]
    fn sort_orders_hold() {
        let rooms = sample();

        let by_price = RoomQuery {
            sort: SortKey::PriceLow,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(by_price.windows(2).all(|w| w[0].price <= w[1].price));

        let by_price_desc = RoomQuery {
            sort: SortKey::PriceHigh,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(by_price_desc.windows(2).all(|w| w[0].price >= w[1].price));

        let by_rating = RoomQuery {
            sort: SortKey::Rating,
            ..Default::default()
        }
        .apply(&rooms);
        assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let popular = RoomQuery::default().apply(&rooms);
        let ids: Vec<u64> = popular.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6], "popular keeps fetch order");
    }

    #[test]
    fn kind_filter_and_take_compose() {
        let rooms = sample();
        let doubles = RoomQuery {
            kind: Some(RoomKind::Double),
            ..Default::default()
        }
        .apply(&rooms);
        assert_eq!(doubles.len(), 1);
        assert_eq!(doubles[0].id, 2);

        let limited = ListQuery::new().take(2).apply(&rooms);
        assert_eq!(limited.len(), 2);

        let generous = ListQuery::new().take(100).apply(&rooms);
        assert_eq!(generous.len(), rooms.len(), "take never exceeds length");
    }

    #[test]
    fn category_filter_matches_slugs() {
        #[derive(Clone)]
        struct Item(&'static str);

        let items = vec![Item("rooms"), Item("dining"), Item("rooms")];
        let rooms_only = filter_by_category(&items, Some("rooms"), |i: &Item| i.0);
        assert_eq!(rooms_only.len(), 2);

        let all = filter_by_category(&items, None, |i: &Item| i.0);
        assert_eq!(all.len(), 3);
    }
}
