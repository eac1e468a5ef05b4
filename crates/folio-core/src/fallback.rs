//! Static fallback data.
//!
//! Returned by the read paths when no live source answers, so the page always
//! has something to render. Every function builds a fresh owned value.

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Profile, Project, SocialIcon, SocialLink, Video};

#[must_use]
pub fn profile() -> Profile {
    Profile {
        name: "Kenan Alnaser".to_string(),
        title: "Software Engineer | Futurist | Creative Technologist".to_string(),
        bio: "I'm a developer with a passion for merging technology and creativity. My work \
              spans across software engineering, AI integration, and experimental projects \
              that explore the limits of digital interaction. Whether it's building tools, \
              automating systems, or visualizing abstract ideas, I thrive at the edge of \
              what's next."
            .to_string(),
        location: "Digital Frontier".to_string(),
        specialties: strings(&[
            "Full-stack Development",
            "AI Tools",
            "Creative Coding",
            "Quantum Computing",
        ]),
        tools: strings(&[
            "JavaScript",
            "Python",
            "React",
            "Node.js",
            "TensorFlow",
            "GitHub",
            "Docker",
        ]),
        github_username: Some("Kenan-Alnaser".to_string()),
        youtube_channel_id: None,
    }
}

/// Static project list, with `is_featured` computed by the classifier.
#[must_use]
pub fn projects() -> Vec<Project> {
    [
        StaticProject {
            id: "1",
            name: "Neural Network Visualizer",
            description: "Interactive visualization tool for deep learning models with real-time training analytics",
            language: "JavaScript",
            slug: "neural-viz",
            created: (2024, 1, 15, 10, 30),
            updated: (2024, 6, 20, 15, 45),
            stars: 45,
            forks: 12,
        },
        StaticProject {
            id: "2",
            name: "Quantum Code Generator",
            description: "AI-powered code generation tool for quantum computing applications",
            language: "Python",
            slug: "quantum-gen",
            created: (2024, 2, 20, 14, 20),
            updated: (2024, 7, 10, 9, 15),
            stars: 78,
            forks: 23,
        },
        StaticProject {
            id: "3",
            name: "Cyberpunk Terminal",
            description: "Futuristic command-line interface with neon aesthetics and advanced features",
            language: "TypeScript",
            slug: "cyber-terminal",
            created: (2024, 3, 10, 12, 0),
            updated: (2024, 7, 15, 16, 30),
            stars: 156,
            forks: 34,
        },
        StaticProject {
            id: "4",
            name: "AI Music Composer",
            description: "Machine learning system for generating electronic music compositions",
            language: "Python",
            slug: "ai-composer",
            created: (2024, 4, 5, 8, 45),
            updated: (2024, 7, 20, 11, 20),
            stars: 92,
            forks: 18,
        },
        StaticProject {
            id: "5",
            name: "Blockchain Analytics Tool",
            description: "Real-time cryptocurrency transaction analyzer with predictive algorithms",
            language: "JavaScript",
            slug: "blockchain-analytics",
            created: (2024, 5, 12, 16, 10),
            updated: (2024, 7, 25, 13, 55),
            stars: 67,
            forks: 15,
        },
        StaticProject {
            id: "6",
            name: "Virtual Reality Interface",
            description: "Immersive VR environment for 3D data visualization and manipulation",
            language: "C#",
            slug: "vr-interface",
            created: (2024, 6, 1, 10, 30),
            updated: (2024, 7, 28, 14, 40),
            stars: 123,
            forks: 29,
        },
    ]
    .into_iter()
    .map(StaticProject::into_project)
    .collect()
}

#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    vec![
        link("GitHub", "https://github.com/Kenan-Alnaser", SocialIcon::Github, 1),
        link(
            "LinkedIn",
            "https://www.linkedin.com/in/kenan-alnaser",
            SocialIcon::Linkedin,
            2,
        ),
        link("YouTube", "https://www.youtube.com/@voransirt", SocialIcon::Youtube, 3),
        link("Twitch", "https://www.twitch.tv/vor_ansirt", SocialIcon::Twitch, 4),
    ]
}

#[must_use]
pub fn videos() -> Vec<Video> {
    vec![
        video(
            "1",
            "Building AI-Powered Applications",
            "Deep dive into creating intelligent software solutions",
            "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=600&h=400&fit=crop",
            "25K",
            "15:32",
        ),
        video(
            "2",
            "Future of Cybersecurity",
            "Exploring emerging threats and defense mechanisms",
            "https://images.unsplash.com/photo-1563206767-5b18f218e8de?w=600&h=400&fit=crop",
            "18K",
            "22:45",
        ),
        video(
            "3",
            "Quantum Computing Explained",
            "Making quantum concepts accessible to developers",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=600&h=400&fit=crop",
            "32K",
            "18:20",
        ),
    ]
}

struct StaticProject {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    language: &'static str,
    slug: &'static str,
    created: (i32, u32, u32, u32, u32),
    updated: (i32, u32, u32, u32, u32),
    stars: u32,
    forks: u32,
}

impl StaticProject {
    fn into_project(self) -> Project {
        Project {
            id: self.id.to_string(),
            github_id: None,
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            language: Some(self.language.to_string()),
            html_url: format!("https://github.com/Kenan-Alnaser/{}", self.slug),
            created_at: utc(self.created),
            updated_at: utc(self.updated),
            stargazers_count: self.stars,
            forks_count: self.forks,
            topics: Vec::new(),
            is_featured: false,
        }
        .with_featured_recomputed()
    }
}

/// Build a UTC timestamp from literal parts. The inputs are constants above,
/// so the epoch default is unreachable in practice.
fn utc((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn link(name: &str, url: &str, icon: SocialIcon, order: u32) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon,
        order,
    }
}

fn video(
    id: &str,
    title: &str,
    description: &str,
    thumbnail: &str,
    views: &str,
    duration: &str,
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: thumbnail.to_string(),
        video_id: "dQw4w9WgXcQ".to_string(),
        views: views.to_string(),
        duration: duration.to_string(),
        is_featured: true,
    }
}
