/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    pub contact: Contact,
    pub links: Links,
    pub assets: Assets,
    pub highlights: &'static [Highlight],
}

pub struct Contact {
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub address: &'static str,
}

pub struct Links {
    pub email_compose: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub map_embed: &'static str,
}

/// Roots that relative asset paths are resolved against
pub struct Assets {
    pub storage_root: &'static str,
    pub images_root: &'static str,
    pub placeholder: &'static str,
}

/// One "why study with us" item on the About section
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Ruang Kode Academy",
    tagline: "Bootcamp dan webinar pemrograman untuk karier digital",

    contact: Contact {
        email: "halo@ruangkode.id",
        whatsapp: "6281234567890",
        instagram: "ruangkode.id",
        address: "Jl. Kaliurang KM 5, Sleman, Daerah Istimewa Yogyakarta",
    },

    links: Links {
        email_compose: "https://mail.google.com/mail/?view=cm&fs=1&to=halo@ruangkode.id",
        whatsapp: "https://wa.me/6281234567890",
        instagram: "https://www.instagram.com/ruangkode.id/",
        map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3953.2!2d110.38!3d-7.76!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zUnVhbmcgS29kZQ!5e0!3m2!1sid!2sid",
    },

    assets: Assets {
        storage_root: "/storage",
        images_root: "/assets/images",
        placeholder: "/assets/images/placeholder.svg",
    },

    highlights: &[
        Highlight {
            title: "Kurikulum berbasis industri",
            body: "Materi disusun bersama praktisi dan diperbarui setiap angkatan.",
        },
        Highlight {
            title: "Mentor berpengalaman",
            body: "Belajar langsung dari engineer yang bekerja di perusahaan teknologi.",
        },
        Highlight {
            title: "Proyek nyata",
            body: "Setiap peserta membangun portofolio dari studi kasus sungguhan.",
        },
    ],
};
