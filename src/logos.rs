use std::collections::HashMap;

use image::{DynamicImage, GenericImageView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, Widget,
    },
};

pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/100?text=NBA";
const LOGO_CDN: &str = "https://a.espncdn.com/i/teamlogos/nba/500";

const TEAMS: [(&str, &str); 31] = [
    ("Atlanta Hawks", "atl"),
    ("Boston Celtics", "bos"),
    ("Brooklyn Nets", "bkn"),
    ("Charlotte Hornets", "cha"),
    ("Chicago Bulls", "chi"),
    ("Cleveland Cavaliers", "cle"),
    ("Dallas Mavericks", "dal"),
    ("Denver Nuggets", "den"),
    ("Detroit Pistons", "det"),
    ("Golden State Warriors", "gsw"),
    ("Houston Rockets", "hou"),
    ("Indiana Pacers", "ind"),
    ("LA Clippers", "lac"),
    ("Los Angeles Clippers", "lac"),
    ("Los Angeles Lakers", "lal"),
    ("Memphis Grizzlies", "mem"),
    ("Miami Heat", "mia"),
    ("Milwaukee Bucks", "mil"),
    ("Minnesota Timberwolves", "min"),
    ("New Orleans Pelicans", "no"),
    ("New York Knicks", "nyk"),
    ("Oklahoma City Thunder", "okc"),
    ("Orlando Magic", "orl"),
    ("Philadelphia 76ers", "phi"),
    ("Phoenix Suns", "phx"),
    ("Portland Trail Blazers", "por"),
    ("Sacramento Kings", "sac"),
    ("San Antonio Spurs", "sas"),
    ("Toronto Raptors", "tor"),
    ("Utah Jazz", "utah"),
    ("Washington Wizards", "was"),
];

pub const HOME_TEAM: &str = "Golden State Warriors";

pub fn team_abbreviation(team_name: &str) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|(name, _)| *name == team_name)
        .map(|(_, abbr)| *abbr)
}

/// Logo URL for a team display name. Unknown names get the placeholder.
pub fn team_logo_url(team_name: &str) -> String {
    match team_abbreviation(team_name) {
        Some(abbr) => format!("{}/{}.png", LOGO_CDN, abbr),
        None => PLACEHOLDER_LOGO.to_string(),
    }
}

/// Decoded logos, keyed by the URL they were fetched from.
#[derive(Debug, Default)]
pub struct LogoStore {
    images: HashMap<String, DynamicImage>,
    requested: std::collections::HashSet<String>,
}

impl LogoStore {
    pub fn get(&self, url: &str) -> Option<&DynamicImage> {
        self.images.get(url)
    }

    pub fn insert(&mut self, url: String, img: DynamicImage) {
        self.images.insert(url, img);
    }

    /// Marks `url` as requested; returns false if it already was.
    pub fn claim(&mut self, url: &str) -> bool {
        self.requested.insert(url.to_string())
    }
}

/// Braille rendering of a downloaded logo.
pub struct TeamLogo<'a> {
    pub img: &'a DynamicImage,
}

impl Widget for TeamLogo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let img = self.img;
        // Two Braille dots per column, four per row.
        let cols = area.width as u32 * 2;
        let rows = area.height as u32 * 4;
        let x_max = cols as f64 / 2.0;
        let y_max = rows as f64 / 2.0;
        Canvas::default()
            .block(Block::default())
            .marker(Marker::Braille)
            .x_bounds([0.0, x_max])
            .y_bounds([0.0, y_max])
            .paint(|ctx| {
                let (w, h) = img.dimensions();
                for y in 0..rows {
                    for x in 0..cols {
                        let img_x = (x as f64 / cols as f64 * w as f64) as u32;
                        let img_y = (y as f64 / rows as f64 * h as f64) as u32;
                        if img_x < w && img_y < h {
                            let p = img.get_pixel(img_x, img_y);
                            if p[3] > 128 {
                                ctx.draw(&Points {
                                    coords: &[(x as f64 / 2.0, y_max - (y as f64 / 2.0))],
                                    color: Color::Rgb(p[0], p[1], p[2]),
                                });
                            }
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
