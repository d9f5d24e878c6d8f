//! Rental-search filters rendered into the source's query string.

/// Search parameters for one rental-apartment query. Prices are in roubles;
/// the query string renders them in thousands with one decimal place.
#[derive(Debug, Clone)]
pub struct RentFilters {
    pub price_low_roubles: u32,
    pub price_high_roubles: u32,
    pub min_area_sqm: u32,
    pub max_area_sqm: u32,
    pub one_room: bool,
    pub two_rooms: bool,
    pub three_rooms: bool,
    /// Restrict results to listings published today.
    pub published_today: bool,
}

impl Default for RentFilters {
    fn default() -> Self {
        Self {
            price_low_roubles: 19_000,
            price_high_roubles: 29_500,
            min_area_sqm: 32,
            max_area_sqm: 80,
            one_room: true,
            two_rooms: true,
            three_rooms: false,
            published_today: true,
        }
    }
}

impl RentFilters {
    fn price_in_thousands(roubles: u32) -> String {
        format!("{:.1}", roubles as f64 / 1000.0)
    }

    /// Renders the filters as the source's query string, e.g.
    /// `price=19.0&price=29.5&room_count=1&room_count=2&total_area=32&total_area=80&date_publisher=day`.
    pub fn query_string(&self) -> String {
        let mut parts = vec![
            format!("price={}", Self::price_in_thousands(self.price_low_roubles)),
            format!("price={}", Self::price_in_thousands(self.price_high_roubles)),
        ];

        for (enabled, room) in [
            (self.one_room, 1),
            (self.two_rooms, 2),
            (self.three_rooms, 3),
        ] {
            if enabled {
                parts.push(format!("room_count={}", room));
            }
        }

        parts.push(format!("total_area={}", self.min_area_sqm));
        parts.push(format!("total_area={}", self.max_area_sqm));

        if self.published_today {
            parts.push("date_publisher=day".to_string());
        }

        parts.join("&")
    }
}
