use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    HandTools,
    PowerTools,
    Fasteners,
    Garden,
    Paint,
    Plumbing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HandTools => "Hand Tools",
            Self::PowerTools => "Power Tools",
            Self::Fasteners => "Fasteners",
            Self::Garden => "Garden",
            Self::Paint => "Paint",
            Self::Plumbing => "Plumbing",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub price_cents: u32,
    pub description: &'static str,
    pub featured: bool,
}

pub const PRODUCTS_PER_PAGE: usize = 6;

// the in-store catalog
//
// this is a brochure site: prices and stock are confirmed at the counter, so the list is
// compiled into the app rather than fetched
pub const CATALOG: &[Product] = &[
    Product {
        id: 1,
        name: "16 oz Claw Hammer",
        category: Category::HandTools,
        price_cents: 2499,
        description: "Fiberglass handle, smooth face, magnetic nail starter.",
        featured: true,
    },
    Product {
        id: 2,
        name: "25 ft Tape Measure",
        category: Category::HandTools,
        price_cents: 1899,
        description: "Stand-out blade with fractional markings and belt clip.",
        featured: false,
    },
    Product {
        id: 3,
        name: "20V Cordless Drill",
        category: Category::PowerTools,
        price_cents: 12900,
        description: "Two-speed drill/driver with two batteries and charger.",
        featured: true,
    },
    Product {
        id: 4,
        name: "7-1/4 in Circular Saw",
        category: Category::PowerTools,
        price_cents: 8999,
        description: "15 amp motor, bevel to 56 degrees, carbide blade included.",
        featured: false,
    },
    Product {
        id: 5,
        name: "Deck Screws, 5 lb",
        category: Category::Fasteners,
        price_cents: 3249,
        description: "#9 x 3 in coated star-drive screws rated for treated lumber.",
        featured: false,
    },
    Product {
        id: 6,
        name: "Assorted Wall Anchors",
        category: Category::Fasteners,
        price_cents: 899,
        description: "120 piece kit for drywall, plaster and masonry.",
        featured: false,
    },
    Product {
        id: 7,
        name: "Bypass Pruning Shears",
        category: Category::Garden,
        price_cents: 2199,
        description: "Hardened steel blades cut branches up to 3/4 in.",
        featured: true,
    },
    Product {
        id: 8,
        name: "50 ft Garden Hose",
        category: Category::Garden,
        price_cents: 3999,
        description: "Kink-resistant rubber hose with brass couplings.",
        featured: false,
    },
    Product {
        id: 9,
        name: "Interior Eggshell, 1 gal",
        category: Category::Paint,
        price_cents: 4299,
        description: "Low-odor paint and primer, tinted to order at the counter.",
        featured: true,
    },
    Product {
        id: 10,
        name: "9 in Roller Kit",
        category: Category::Paint,
        price_cents: 1499,
        description: "Frame, tray and two 3/8 in nap covers.",
        featured: false,
    },
    Product {
        id: 11,
        name: "Adjustable Pipe Wrench",
        category: Category::Plumbing,
        price_cents: 2799,
        description: "14 in cast iron wrench with replaceable jaws.",
        featured: false,
    },
    Product {
        id: 12,
        name: "PTFE Thread Tape, 3 pk",
        category: Category::Plumbing,
        price_cents: 499,
        description: "Seals threaded joints on water and gas lines.",
        featured: false,
    },
    Product {
        id: 13,
        name: "Random Orbit Sander",
        category: Category::PowerTools,
        price_cents: 6999,
        description: "5 in pad, variable speed, dust bag included.",
        featured: false,
    },
    Product {
        id: 14,
        name: "Combination Square",
        category: Category::HandTools,
        price_cents: 1599,
        description: "12 in hardened blade with level vial and scribe.",
        featured: false,
    },
];

pub fn featured() -> Vec<&'static Product> {
    CATALOG.iter().filter(|product| product.featured).collect()
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

// one page of a paginated list
#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    // 1-based
    pub page: usize,
    pub page_count: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

// the page number comes straight out of the query string, so anything out of range is
// clamped rather than rejected
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let page_count = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, page_count);

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        page_count,
    }
}
