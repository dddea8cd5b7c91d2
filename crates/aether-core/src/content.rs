//! Static page content rendered by the web frontend.

#[derive(Clone, Copy, Debug)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct WorkItem {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub const SERVICES: [ServiceItem; 3] = [
    ServiceItem {
        title: "3D Modeling",
        description: "High-fidelity assets for games, film, and interactive web experiences.",
        icon: "box",
    },
    ServiceItem {
        title: "Motion Graphics",
        description: "Fluid animations that bring your brand identity to life.",
        icon: "activity",
    },
    ServiceItem {
        title: "Interactive Web",
        description: "Immersive WebGL experiences using Rust and WebGPU.",
        icon: "globe",
    },
];

pub const WORKS: [WorkItem; 3] = [
    WorkItem {
        title: "Neon Horizon",
        category: "Cyberpunk Visualization",
        image: "https://picsum.photos/600/400?random=1",
    },
    WorkItem {
        title: "Abstract Flow",
        category: "Motion Design",
        image: "https://picsum.photos/600/400?random=2",
    },
    WorkItem {
        title: "Product Zen",
        category: "Commercial CGI",
        image: "https://picsum.photos/600/400?random=3",
    },
];
