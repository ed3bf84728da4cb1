//! Static genre lookup for card badges.
//!
//! Covers the common upstream movie genres only; anything else simply gets no badge.

pub fn genre_name(id: u32) -> Option<&'static str> {
    let name = match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Sci-Fi",
        53 => "Thriller",
        _ => return None,
    };
    Some(name)
}

/// Badge for the first listed genre, if it is one we know
pub fn primary_genre(genre_ids: &[u32]) -> Option<&'static str> {
    genre_ids.first().copied().and_then(genre_name)
}
