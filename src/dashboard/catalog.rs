//! Virtual tour catalog shown on the gallery view.

/// A virtual tour preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourCard {
    pub title: &'static str,
    /// Preview image
    pub image_url: &'static str,
    /// Public tour page, opened in a new tab
    pub tour_url: &'static str,
    /// Highlighted showroom card
    pub is_main: bool,
}

/// The showroom tour
pub const MAIN_TOUR: TourCard = TourCard {
    title: "Tour Virtuale dello Showroom",
    image_url: "https://storage.googleapis.com/static.realsee.ai/show/real_estate_photo/81000/81729_16_1656515082.jpg",
    tour_url: "https://realsee.ai/8VRR9VMa",
    is_main: true,
};

/// Demo homes
pub const DEMO_TOURS: [TourCard; 2] = [
    TourCard {
        title: "Casa Campione A",
        image_url: "https://storage.googleapis.com/static.realsee.ai/show/real_estate_photo/73000/73111_16_1653315684.jpg",
        tour_url: "https://realsee.ai/8VRR9VMa",
        is_main: false,
    },
    TourCard {
        title: "Casa Campione B",
        image_url: "https://storage.googleapis.com/static.realsee.ai/show/real_estate_photo/102000/102280_16_1665414840.jpg",
        tour_url: "https://realsee.ai/O3eeL37d",
        is_main: false,
    },
];
