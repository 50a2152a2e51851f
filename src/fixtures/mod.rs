//! Fixture Store
//!
//! Catálogo estático de respaldo. Cuando el almacén duradero no responde
//! (o devuelve un resultado vacío), las lecturas públicas sirven estos
//! datos para que las páginas del sitio nunca fallen por una caída de
//! storage. Las escrituras jamás tocan este módulo.
//!
//! Los UUIDs son deterministas para que la resolución slug -> id sea
//! estable entre lecturas con fallback.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::service::ServiceEntry;
use crate::models::testimonial::Testimonial;
use crate::models::vehicle::{Vehicle, VehicleType};

fn fixture_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).expect("fixture uuid literal")
}

fn fixture_ts() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
        .expect("fixture timestamp literal")
        .with_timezone(&Utc)
}

fn vehicle(
    id: &str,
    name: &str,
    slug: &str,
    vehicle_type: VehicleType,
    capacity: i32,
    hourly_rate: i64,
    min_hours: i32,
    description: &str,
    features: &[&str],
    display_order: i32,
) -> Vehicle {
    Vehicle {
        id: fixture_id(id),
        name: name.to_string(),
        slug: slug.to_string(),
        vehicle_type,
        capacity,
        hourly_rate: Decimal::from(hourly_rate),
        min_hours,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image_url: None,
        gallery_urls: Vec::new(),
        display_order,
        is_active: true,
        created_at: fixture_ts(),
        updated_at: fixture_ts(),
    }
}

fn service(
    id: &str,
    title: &str,
    slug: &str,
    tagline: &str,
    description: &str,
    long_description: &str,
    icon: &str,
    keywords: &str,
    display_order: i32,
) -> ServiceEntry {
    ServiceEntry {
        id: fixture_id(id),
        title: title.to_string(),
        slug: slug.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        icon: icon.to_string(),
        keywords: keywords.to_string(),
        image_url: None,
        display_order,
        is_active: true,
        created_at: fixture_ts(),
    }
}

fn testimonial(
    id: &str,
    name: &str,
    event_type: &str,
    rating: i32,
    text: &str,
    is_featured: bool,
) -> Testimonial {
    Testimonial {
        id: fixture_id(id),
        name: name.to_string(),
        event_type: Some(event_type.to_string()),
        rating,
        text: text.to_string(),
        is_featured,
        is_active: true,
        created_at: fixture_ts(),
    }
}

lazy_static! {
    /// Flota de respaldo (misma que el seed del almacén)
    pub static ref MOCK_VEHICLES: Vec<Vehicle> = vec![
        vehicle(
            "a1000000-0000-4000-8000-000000000001",
            "The Sovereign",
            "the-sovereign",
            VehicleType::PartyBus,
            30,
            250,
            3,
            "Our flagship 30-passenger party bus. The ultimate nightlife experience on wheels with full club amenities including LED club lighting, a premium sound system, wet bar, and dance area.",
            &["LED Club Lighting", "Premium Sound System", "Wet Bar", "Bluetooth Audio", "Stripper Pole", "Smoke Machine"],
            1,
        ),
        vehicle(
            "a1000000-0000-4000-8000-000000000002",
            "The Crown Jewel",
            "the-crown-jewel",
            VehicleType::PartyBus,
            20,
            200,
            3,
            "Mid-size luxury party bus perfect for bachelor and bachelorette parties, birthday celebrations, and nightlife adventures. Features laser lights, a powerful subwoofer system, and dedicated bar area.",
            &["Laser Lights", "Subwoofer System", "Bar Area", "TV Screens", "Privacy Tinting", "Climate Control"],
            2,
        ),
        vehicle(
            "a1000000-0000-4000-8000-000000000003",
            "Royal Sprinter",
            "royal-sprinter",
            VehicleType::SprinterLimo,
            14,
            175,
            2,
            "Sleek Mercedes Sprinter limo van with premium leather interior and fiber optic lighting. Perfect for VIP groups, corporate events, and intimate celebrations.",
            &["Mercedes-Benz", "Leather Interior", "Fiber Optic Lighting", "Premium Audio", "USB Charging", "Champagne Bar"],
            3,
        ),
        vehicle(
            "a1000000-0000-4000-8000-000000000004",
            "The Monarch",
            "the-monarch",
            VehicleType::StretchLimo,
            10,
            150,
            2,
            "Classic stretch SUV limousine with J-seating configuration and mini bar. Arrive in style for weddings, proms, and special occasions throughout Las Vegas.",
            &["Stretch SUV", "J-Seating", "Mini Bar", "Flat Screens", "Fiber Optics", "Privacy Partition"],
            4,
        ),
        vehicle(
            "a1000000-0000-4000-8000-000000000005",
            "Black Diamond",
            "black-diamond",
            VehicleType::StretchLimo,
            8,
            125,
            2,
            "Elegant stretch Lincoln limousine offering timeless luxury for airport transfers, date nights, and intimate celebrations. Features champagne setup and premium leather seating.",
            &["Lincoln Stretch", "Leather Seats", "Champagne Setup", "LED Lighting", "Sound System", "Tinted Windows"],
            5,
        ),
        vehicle(
            "a1000000-0000-4000-8000-000000000006",
            "The Empire",
            "the-empire",
            VehicleType::PartyBus,
            40,
            350,
            4,
            "The biggest party on wheels in Las Vegas. Our 40-passenger mega bus features dual zone lighting, concert-grade sound, multiple bars, a dance floor, and a VIP lounge area.",
            &["Dual Zone Lighting", "Concert Sound", "Multiple Bars", "Dance Floor", "Karaoke", "VIP Lounge Area"],
            6,
        ),
    ];

    /// Catálogo de servicios de respaldo
    pub static ref MOCK_SERVICES: Vec<ServiceEntry> = vec![
        service(
            "b2000000-0000-4000-8000-000000000001",
            "Bachelor Parties",
            "bachelor-party",
            "Send him off in legendary style",
            "Your last night of freedom deserves a party bus that matches the energy. Strip tours, club crawls, VIP access — we handle it all.",
            "Planning a bachelor party in Las Vegas? We deliver the ultimate groom's night out with our fleet of luxury party buses and limousines, with custom routes across the Strip and VIP coordination at the hottest venues.",
            "🎉",
            "bachelor party bus Las Vegas, bachelor party limo Vegas, grooms night out Las Vegas",
            1,
        ),
        service(
            "b2000000-0000-4000-8000-000000000002",
            "Bachelorette Parties",
            "bachelorette-party",
            "Crown the bride-to-be",
            "Pink lights, champagne, and the hottest spots on the Strip. Our party buses are the ultimate bachelorette experience.",
            "Give the bride-to-be the Las Vegas bachelorette party she deserves: champagne on ice, custom lighting, pool party circuits, and a rolling VIP experience for groups of 8 to 40 guests.",
            "💎",
            "bachelorette party bus Las Vegas, bachelorette limo Vegas, bride tribe Las Vegas",
            2,
        ),
        service(
            "b2000000-0000-4000-8000-000000000003",
            "Wedding Transportation",
            "wedding",
            "Your grand entrance awaits",
            "Elegant limousines and luxury buses for your wedding party. Arrive in style, depart in luxury.",
            "From ceremony to reception, our chauffeurs ensure your wedding party arrives on time and in style, with detailed vehicles, complimentary champagne, and coordination with Las Vegas venues and planners.",
            "💒",
            "wedding limo Las Vegas, wedding party bus Vegas, wedding transportation Las Vegas",
            3,
        ),
        service(
            "b2000000-0000-4000-8000-000000000004",
            "Nightlife & Club Crawls",
            "nightlife",
            "Own the night",
            "Skip the Uber surge and taxi lines. Our VIP party buses take you door-to-door across the hottest clubs and venues.",
            "The best way to experience Las Vegas nightlife is from the back of a party bus: door-to-door club crawls with club-quality sound, LED lighting, and stocked bars between venues.",
            "🌃",
            "Las Vegas club crawl party bus, nightlife transportation Vegas, VIP nightlife Las Vegas",
            4,
        ),
        service(
            "b2000000-0000-4000-8000-000000000005",
            "Corporate Events",
            "corporate",
            "Impress without the stress",
            "Professional transportation for conventions, trade shows, team outings, and corporate entertainment in Las Vegas.",
            "Professional luxury vehicles for conventions, client entertainment, and executive travel, with punctual formal-attire chauffeurs and corporate billing for CES, SEMA, and every major Las Vegas convention.",
            "🏢",
            "corporate transportation Las Vegas, convention shuttle Vegas, corporate limo Las Vegas",
            5,
        ),
        service(
            "b2000000-0000-4000-8000-000000000006",
            "Birthday Celebrations",
            "birthday",
            "Make it unforgettable",
            "Turn your birthday into an event. Our party buses transform your celebration into the party of the year.",
            "Celebrate Las Vegas style: nightclubs on wheels with LED lighting, premium sound, dance space, and full bar setups for birthday groups from 8 to 40 guests.",
            "🎂",
            "birthday party bus Las Vegas, birthday limo rental Vegas, birthday celebration Las Vegas",
            6,
        ),
        service(
            "b2000000-0000-4000-8000-000000000007",
            "Prom & Homecoming",
            "prom",
            "The entrance they'll never forget",
            "Safe, stylish, and unforgettable. Professional chauffeurs ensure a prom night your group will talk about forever.",
            "Safe, stylish prom transportation for Las Vegas area high schools: insured vehicles, background-checked chauffeurs, and clear itineraries coordinated with parents and schools.",
            "🎓",
            "prom limo Las Vegas, homecoming party bus Vegas, prom transportation Las Vegas",
            7,
        ),
        service(
            "b2000000-0000-4000-8000-000000000008",
            "Airport Transfers",
            "airport",
            "First class from landing",
            "Luxury airport pickup and drop-off from Harry Reid International Airport. Start and end your Vegas trip like royalty.",
            "Premium pickup and drop-off from Harry Reid International Airport to any Las Vegas destination, with flight monitoring, meet-and-greet, and vehicles for every group size.",
            "✈️",
            "airport limo Las Vegas, Harry Reid airport car service, Las Vegas airport transfer",
            8,
        ),
        service(
            "b2000000-0000-4000-8000-000000000009",
            "Las Vegas Strip Tours",
            "strip-tour",
            "See Vegas like a VIP",
            "Custom Strip tours with photo stops, sightseeing, and the best views of the Las Vegas skyline.",
            "Custom Strip tours combining sightseeing and photo stops at iconic landmarks, with chauffeurs who double as local guides and party buses that make the ride part of the show.",
            "🎰",
            "Las Vegas Strip tour party bus, Vegas Strip limo tour, Las Vegas sightseeing tour",
            9,
        ),
    ];

    /// Testimonios de respaldo
    pub static ref MOCK_TESTIMONIALS: Vec<Testimonial> = vec![
        testimonial(
            "c3000000-0000-4000-8000-000000000001",
            "Marcus T.",
            "Bachelor Party",
            5,
            "Absolute legends. The Sovereign party bus was insane — lights, sound, the whole vibe. Our group of 25 had the best night ever on the Strip.",
            true,
        ),
        testimonial(
            "c3000000-0000-4000-8000-000000000002",
            "Jessica L.",
            "Bachelorette Party",
            5,
            "We felt like actual royalty. The driver was amazing, the bus was spotless, and they even had champagne ready. 10/10 would book again!",
            true,
        ),
        testimonial(
            "c3000000-0000-4000-8000-000000000003",
            "David & Sarah K.",
            "Wedding",
            5,
            "They handled all our wedding transportation flawlessly. The limos were beautiful and the drivers were incredibly professional.",
            true,
        ),
        testimonial(
            "c3000000-0000-4000-8000-000000000004",
            "Chris R.",
            "Corporate Event",
            5,
            "Booked the Royal Sprinter for a client dinner. Impressed everyone. Professional, on time, and the vehicle was immaculate.",
            false,
        ),
        testimonial(
            "c3000000-0000-4000-8000-000000000005",
            "Amanda P.",
            "Birthday Celebration",
            5,
            "My 30th birthday was EPIC. The party bus was basically a club on wheels. Best birthday ever!",
            true,
        ),
        testimonial(
            "c3000000-0000-4000-8000-000000000006",
            "Tyler M.",
            "Nightlife & Club Crawl",
            5,
            "Skip the taxis and Ubers. This is the only way to do Vegas nightlife. Our driver knew all the best spots and got us VIP everywhere.",
            false,
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_slugs_are_unique() {
        let mut slugs: Vec<&str> = MOCK_VEHICLES.iter().map(|v| v.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), MOCK_VEHICLES.len());
    }

    #[test]
    fn test_the_sovereign_is_resolvable() {
        let found = MOCK_VEHICLES.iter().find(|v| v.slug == "the-sovereign");
        assert!(found.is_some());
        assert_eq!(found.unwrap().vehicle_type, VehicleType::PartyBus);
        assert_eq!(found.unwrap().capacity, 30);
    }

    #[test]
    fn test_fixture_ids_are_deterministic() {
        // La resolución slug -> id debe ser estable entre lecturas
        let a = MOCK_VEHICLES[0].id;
        let b = MOCK_VEHICLES[0].id;
        assert_eq!(a, b);
        assert_eq!(
            a,
            Uuid::parse_str("a1000000-0000-4000-8000-000000000001").unwrap()
        );
    }

    #[test]
    fn test_featured_testimonials_subset() {
        let featured: Vec<_> = MOCK_TESTIMONIALS.iter().filter(|t| t.is_featured).collect();
        assert_eq!(featured.len(), 4);
        assert!(MOCK_TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
