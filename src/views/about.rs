//! Static about page content

fn feature_card(icon: &str, title: &str, description: &str) -> String {
    format!(
        r#"<div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>"#
    )
}

pub fn about_content() -> String {
    let features = [
        feature_card(
            "&#127902;",
            "Extensive Movie Collection",
            "Access thousands of movies from classics to the latest releases, complete with ratings, descriptions, and images.",
        ),
        feature_card(
            "&#128421;",
            "Powered by TMDB",
            "Leveraging the extensive data from The Movie Database (TMDB) API to provide accurate and up-to-date information.",
        ),
        feature_card(
            "&#128187;",
            "Rust on the Server",
            "Pages are rendered on the server with axum, so every view arrives complete and fast on any device.",
        ),
    ]
    .concat();

    format!(
        r#"<div class="about">
    <section class="hero">
        <h1>About Our Movie Database</h1>
        <p>A movie browsing site built on the TMDB API, bringing you the latest and greatest in cinema.</p>
    </section>
    <section class="features">{features}</section>
    <section class="mission">
        <h2>Our Mission</h2>
        <p>We believe that everyone deserves access to comprehensive film information. Our mission is to create a user-friendly platform that helps movie enthusiasts discover, explore, and enjoy cinema from around the world.</p>
    </section>
    <section class="how-it-works">
        <h2>How It Works</h2>
        <div class="columns">
            <div>
                <h3>Data Integration</h3>
                <p>Every page asks TMDB for fresh data, including titles, descriptions, ratings, and images, so listings stay current with the latest releases.</p>
                <p>Search finds movies by title, and your five most recent searches stay one click away in the search box.</p>
            </div>
            <div>
                <h3>User Experience</h3>
                <p>Pages are plain HTML with a small stylesheet; there is nothing to install and nothing to wait for beyond the data itself.</p>
            </div>
        </div>
    </section>
    <section class="contact">
        <h2>Connect With Us</h2>
        <p>Have questions or feedback? We'd love to hear from you!</p>
        <p>Email us at: <a href="mailto:contact@moviedb-example.com">contact@moviedb-example.com</a></p>
    </section>
</div>"#
    )
}
