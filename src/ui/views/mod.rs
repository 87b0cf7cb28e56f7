pub mod ai_radio;
pub mod hall;
pub mod home;
pub mod lyrics;
pub mod now_playing;
pub mod playlist_detail;
pub mod queue;

pub use ai_radio::AiRadio;
pub use hall::Hall;
pub use home::Home;
pub use lyrics::LyricsView;
pub use now_playing::NowPlaying;
pub use playlist_detail::PlaylistDetail;
pub use queue::Queue;

use crate::ui::state::Route;
use crate::ui::traits::View;

/// Root view for a sidebar tab.
pub fn view_for(route: Route) -> Box<dyn View> {
    match route {
        Route::Home => Box::new(Home::default()),
        Route::Hall => Box::new(Hall::default()),
        Route::AiRadio => Box::new(AiRadio::default()),
        Route::Lyrics => Box::new(LyricsView),
    }
}
