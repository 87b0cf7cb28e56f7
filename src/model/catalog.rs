//! Static in-memory catalog backing every browsing surface. The data is the
//! service's mock fixture set; nothing here is fetched or persisted.

use lazy_static::lazy_static;

use crate::model::{
    playlist::{Artist, Banner, Playlist},
    track::{LyricLine, Track},
};

/// Intent to start playback, issued by a browsing surface or the AI radio.
/// Either a catalog id, resolved to a full track before it reaches the
/// clock, or an external suggestion materialized as a standalone track.
/// Partial data is never merged into the currently loaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRequest {
    Id(String),
    External { title: String, artist: String },
}

/// Placeholder duration for externally suggested tracks, which carry no
/// cue sheet.
const EXTERNAL_DURATION: &str = "03:30";

/// Resolves a play request against the catalog. Unknown ids yield `None`;
/// the caller logs and drops the request instead of playing a half-formed
/// track.
pub fn resolve(request: &PlayRequest) -> Option<Track> {
    match request {
        PlayRequest::Id(id) => track_by_id(id),
        PlayRequest::External { title, artist } => Some(Track {
            id: format!("ext-{}", title.to_lowercase().replace(' ', "-")),
            title: title.clone(),
            artist: artist.clone(),
            album: "AI 电台".into(),
            cover: format!("https://picsum.photos/seed/{title}/300/300"),
            duration: EXTERNAL_DURATION.into(),
            is_vip: false,
            is_hi_res: false,
            has_video: false,
            lyrics: Vec::new(),
        }),
    }
}

pub fn track_by_id(id: &str) -> Option<Track> {
    if DEFAULT_TRACK.id == id {
        return Some(DEFAULT_TRACK.clone());
    }
    RECOMMENDED.iter().find(|track| track.id == id).cloned()
}

pub fn default_track() -> Track {
    DEFAULT_TRACK.clone()
}

fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    lyrics: Vec<LyricLine>,
) -> Track {
    Track {
        id: id.into(),
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        cover: format!("https://picsum.photos/seed/s{id}/100/100"),
        duration: duration.into(),
        is_vip: false,
        is_hi_res: false,
        has_video: false,
        lyrics,
    }
}

fn mock_lyrics() -> Vec<LyricLine> {
    vec![
        LyricLine::new(0, "作词：海来阿木/吴欢"),
        LyricLine::new(2, "作曲：海来阿木/吴欢"),
        LyricLine::new(4, "演唱：海来阿木"),
        LyricLine::new(8, "这一生 这一路"),
        LyricLine::new(12, "走过平湖 走过风雨"),
        LyricLine::new(16, "我回头望去"),
        LyricLine::new(20, "还是那一抹绿"),
    ]
}

fn playlist(id: &str, title: &str, play_count: &str, description: &str) -> Playlist {
    Playlist {
        id: id.into(),
        title: title.into(),
        cover: format!("https://picsum.photos/seed/{id}/300/300"),
        play_count: play_count.into(),
        description: Some(description.into()),
        is_ranking: false,
    }
}

fn ranking(id: &str, title: &str, play_count: &str) -> Playlist {
    Playlist {
        id: id.into(),
        title: title.into(),
        cover: format!("https://picsum.photos/seed/{id}/400/400"),
        play_count: play_count.into(),
        description: None,
        is_ranking: true,
    }
}

fn artist(id: &str, name: &str, fans: &str) -> Artist {
    Artist {
        id: id.into(),
        name: name.into(),
        avatar: format!("https://picsum.photos/seed/{id}/300/300"),
        fans: fans.into(),
    }
}

lazy_static! {
    static ref DEFAULT_TRACK: Track = {
        let mut t = track("s1", "嘉禾望岗", "海来阿木", "嘉禾望岗", "04:03", mock_lyrics());
        t.cover = "https://picsum.photos/seed/cover/400/400".into();
        t
    };

    pub static ref RECOMMENDED: Vec<Track> = {
        let mut tracks = vec![
            track("14", "离开我的依赖", "王艳薇", "离开我的依赖", "03:53", mock_lyrics()),
            track("15", "失眠", "Suki刘舒妤", "Ladies Night", "03:31", mock_lyrics()),
            track("16", "小半", "陈粒", "小梦大半", "04:57", mock_lyrics()),
            track("17", "唯一", "G.E.M. 邓紫棋", "T.I.M.E.", "04:13", mock_lyrics()),
            track("18", "雨爱", "杨丞琳", "雨爱", "04:20", mock_lyrics()),
            track("19", "野马尘埃 Floating Mist", "阿兰", "霄灯映明月", "02:53", mock_lyrics()),
        ];
        tracks[0].is_vip = true;
        tracks[0].is_hi_res = true;
        tracks[0].has_video = true;
        tracks[1].is_vip = true;
        tracks[2].is_hi_res = true;
        tracks[2].has_video = true;
        tracks[3].is_vip = true;
        tracks[3].is_hi_res = true;
        tracks[3].has_video = true;
        tracks[4].is_vip = true;
        tracks[4].is_hi_res = true;
        tracks[4].has_video = true;
        tracks
    };

    pub static ref PLAYLISTS: Vec<Playlist> = vec![
        playlist("p1", "2024 年度全球热歌", "14.2亿", "汇聚全年度全球范围内听歌量最高的 50 首单曲。"),
        playlist("p2", "深夜爵士小馆", "2.5亿", "萨克斯风与钢琴的缠绵，给每一个失眠之夜一点慰藉。"),
        playlist("p3", "专注工作：阿尔法波", "21.0亿", "白噪音与阿尔法波的结合，让你的工作效率翻倍。"),
        playlist("p4", "燃脂健身电音", "8.3亿", "128BPM 以上的强劲节奏，助你突破极限。"),
        playlist("p5", "慵懒午后时光", "2.3亿", "一杯咖啡，一本书，和一段恰到好处的背景音乐。"),
        playlist("p6", "沉浸式代码模式", "9.3亿", "专为程序员打造，滤掉喧嚣，只剩逻辑与旋律。"),
    ];

    pub static ref RANKINGS: Vec<Playlist> = vec![
        ranking("r1", "飙升榜", "99w+"),
        ranking("r2", "热歌榜", "150w+"),
        ranking("r3", "新歌榜", "80w+"),
        ranking("r4", "流行指数", "120w+"),
    ];

    pub static ref ARTISTS: Vec<Artist> = vec![
        artist("a1", "周杰伦", "3.2亿"),
        artist("a2", "陈奕迅", "1.5亿"),
        artist("a3", "邓紫棋", "9800万"),
        artist("a4", "毛不易", "5600万"),
        artist("a5", "薛之谦", "8900万"),
        artist("a6", "李荣浩", "4200万"),
    ];

    pub static ref BANNERS: Vec<Banner> = vec![
        Banner {
            id: "b1".into(),
            title: "霓虹美梦".into(),
            subtitle: "属于深夜的赛博朋克节奏".into(),
            kind: "数字专辑".into(),
            track_id: Some("14".into()),
        },
        Banner {
            id: "b2".into(),
            title: "夏日流动".into(),
            subtitle: "清凉屋顶派对必备 House".into(),
            kind: "独家内容".into(),
            track_id: Some("16".into()),
        },
        Banner {
            id: "b3".into(),
            title: "原声灵魂".into(),
            subtitle: "触动内心的纯净旋律".into(),
            kind: "新歌首发".into(),
            track_id: Some("17".into()),
        },
    ];
}
