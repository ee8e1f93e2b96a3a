//! Curated in-memory catalog seeds. Persistence of the source-of-truth
//! catalog belongs to an external collaborator; this module carries the
//! static data the storefront and the concierge matcher operate on.

use rust_decimal::Decimal;

use crate::domain::catalog_item::{Product, ProductId, ServiceId, WellnessService};
use crate::domain::membership::{Membership, MembershipId};

#[derive(Debug, Clone, Copy)]
struct ServiceSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: i64,
    rating: f64,
    review_count: u32,
    duration_minutes: u32,
}

const SERVICE_SEEDS: &[ServiceSeed] = &[
    ServiceSeed {
        id: "srv-001",
        name: "Masaje Relajante de Cuerpo Completo",
        category: "Masajes",
        description: "Un espacio de calma profunda con aceites esenciales para liberar la tensión muscular.",
        price: 120_000,
        rating: 4.8,
        review_count: 132,
        duration_minutes: 60,
    },
    ServiceSeed {
        id: "srv-002",
        name: "Clase de Yoga Restaurativo",
        category: "Yoga",
        description: "Sesión guiada de posturas suaves y respiración consciente para recuperar energía.",
        price: 45_000,
        rating: 4.7,
        review_count: 98,
        duration_minutes: 75,
    },
    ServiceSeed {
        id: "srv-003",
        name: "Facial Hidratante con Ácido Hialurónico",
        category: "Facial",
        description: "Limpieza profunda e hidratación intensiva para devolverle luminosidad a tu piel.",
        price: 95_000,
        rating: 4.6,
        review_count: 76,
        duration_minutes: 50,
    },
    ServiceSeed {
        id: "srv-004",
        name: "Meditación Guiada para el Estrés",
        category: "Meditación",
        description: "Práctica de atención plena para calmar la mente y mejorar el descanso nocturno.",
        price: 35_000,
        rating: 4.9,
        review_count: 154,
        duration_minutes: 40,
    },
    ServiceSeed {
        id: "srv-005",
        name: "Sesión de Aromaterapia",
        category: "Aromaterapia",
        description: "Mezclas personalizadas de aceites esenciales para el bienestar emocional.",
        price: 70_000,
        rating: 4.5,
        review_count: 41,
        duration_minutes: 45,
    },
    ServiceSeed {
        id: "srv-006",
        name: "Masaje Deportivo Descontracturante",
        category: "Masajes",
        description: "Trabajo muscular profundo para deportistas y recuperación de entrenamientos.",
        price: 130_000,
        rating: 4.7,
        review_count: 63,
        duration_minutes: 60,
    },
    ServiceSeed {
        id: "srv-007",
        name: "Asesoría Nutricional de Bienestar",
        category: "Nutrición",
        description: "Plan de alimentación personalizado con enfoque integral de bienestar.",
        price: 110_000,
        rating: 4.8,
        review_count: 52,
        duration_minutes: 60,
    },
    ServiceSeed {
        id: "srv-008",
        name: "Circuito de Sauna y Relajación",
        category: "Spa",
        description: "Recorrido de sauna, vapor y ducha fría en un espacio pensado para desconectar.",
        price: 85_000,
        rating: 4.6,
        review_count: 88,
        duration_minutes: 90,
    },
];

#[derive(Debug, Clone, Copy)]
struct ProductSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: i64,
    rating: f64,
    review_count: u32,
    in_stock: bool,
}

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "prd-001",
        name: "Mat de Yoga Antideslizante",
        category: "Yoga",
        description: "Tapete ecológico de caucho natural para tu práctica diaria de yoga.",
        price: 145_000,
        rating: 4.7,
        review_count: 210,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-002",
        name: "Aceite Esencial de Lavanda",
        category: "Aromaterapia",
        description: "Aceite puro de lavanda para difusor, ideal para dormir mejor y relajarse.",
        price: 48_000,
        rating: 4.8,
        review_count: 167,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-003",
        name: "Difusor Ultrasónico de Aromas",
        category: "Aromaterapia",
        description: "Difusor silencioso con luz cálida que transforma cualquier espacio del hogar.",
        price: 165_000,
        rating: 4.5,
        review_count: 94,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-004",
        name: "Té de Hierbas para el Descanso",
        category: "Nutrición",
        description: "Mezcla de manzanilla, valeriana y pasiflora para un descanso reparador.",
        price: 32_000,
        rating: 4.6,
        review_count: 121,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-005",
        name: "Rodillo Facial de Cuarzo",
        category: "Facial",
        description: "Rodillo de cuarzo rosa para masaje facial y mejor absorción de tu rutina de piel.",
        price: 58_000,
        rating: 4.4,
        review_count: 73,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-006",
        name: "Vela de Masaje de Karité",
        category: "Masajes",
        description: "Vela que se funde en aceite tibio de karité para masajes relajantes en casa.",
        price: 62_000,
        rating: 4.7,
        review_count: 45,
        in_stock: false,
    },
    ProductSeed {
        id: "prd-007",
        name: "Cojín de Meditación Zafu",
        category: "Meditación",
        description: "Cojín firme de cáscara de trigo sarraceno para una postura cómoda al meditar.",
        price: 98_000,
        rating: 4.6,
        review_count: 58,
        in_stock: true,
    },
    ProductSeed {
        id: "prd-008",
        name: "Sales de Baño Minerales",
        category: "Spa",
        description: "Sales del Himalaya con eucalipto para un baño de spa en tu propio hogar.",
        price: 41_000,
        rating: 4.5,
        review_count: 102,
        in_stock: true,
    },
];

struct MembershipSeed {
    id: &'static str,
    name: &'static str,
    price: i64,
    price_description: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    is_popular: bool,
}

const MEMBERSHIP_SEEDS: &[MembershipSeed] = &[
    MembershipSeed {
        id: "plan-essential",
        name: "Esencial",
        price: 49_000,
        price_description: "/mes",
        description: "Ideal para empezar tu viaje de bienestar con beneficios clave.",
        features: &[
            "Descuento del 5% en todos los servicios",
            "Acceso a artículos y guías de bienestar",
            "Acumulación de puntos de lealtad (1x)",
            "Soporte por correo electrónico",
        ],
        is_popular: false,
    },
    MembershipSeed {
        id: "plan-plus",
        name: "Plus",
        price: 89_000,
        price_description: "/mes",
        description: "Maximiza tus beneficios y acelera tu progreso de bienestar.",
        features: &[
            "Descuento del 10% en todos los servicios",
            "Descuento del 5% en productos",
            "Acceso a meditaciones guiadas exclusivas",
            "Acumulación de puntos de lealtad (1.5x)",
            "Soporte prioritario por chat",
        ],
        is_popular: true,
    },
    MembershipSeed {
        id: "plan-premium",
        name: "Premium",
        price: 149_000,
        price_description: "/mes",
        description: "La experiencia de bienestar definitiva con acceso total.",
        features: &[
            "Descuento del 15% en todos los servicios",
            "Descuento del 10% en productos",
            "1 servicio de relajación gratuito al mes",
            "Acceso a talleres y eventos exclusivos",
            "Acumulación de puntos de lealtad (2x)",
            "Concierge de bienestar personal",
        ],
        is_popular: false,
    },
];

pub fn wellness_services() -> Vec<WellnessService> {
    SERVICE_SEEDS
        .iter()
        .map(|seed| WellnessService {
            id: ServiceId(seed.id.to_owned()),
            name: seed.name.to_owned(),
            category: seed.category.to_owned(),
            description: seed.description.to_owned(),
            price: Decimal::from(seed.price),
            rating: seed.rating,
            review_count: seed.review_count,
            duration_minutes: seed.duration_minutes,
        })
        .collect()
}

pub fn wellness_products() -> Vec<Product> {
    PRODUCT_SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId(seed.id.to_owned()),
            name: seed.name.to_owned(),
            category: seed.category.to_owned(),
            description: seed.description.to_owned(),
            price: Decimal::from(seed.price),
            rating: seed.rating,
            review_count: seed.review_count,
            in_stock: seed.in_stock,
        })
        .collect()
}

pub fn membership_plans() -> Vec<Membership> {
    MEMBERSHIP_SEEDS
        .iter()
        .map(|seed| Membership {
            id: MembershipId(seed.id.to_owned()),
            name: seed.name.to_owned(),
            price: Decimal::from(seed.price),
            price_description: seed.price_description.to_owned(),
            description: seed.description.to_owned(),
            features: seed.features.iter().map(|feature| (*feature).to_owned()).collect(),
            is_popular: seed.is_popular,
        })
        .collect()
}

/// Read-only catalog view handed to the interfaces.
#[derive(Default)]
pub struct Catalog {
    services: Vec<WellnessService>,
    products: Vec<Product>,
    memberships: Vec<Membership>,
}

impl Catalog {
    pub fn new(
        services: Vec<WellnessService>,
        products: Vec<Product>,
        memberships: Vec<Membership>,
    ) -> Self {
        Self { services, products, memberships }
    }

    pub fn seeded() -> Self {
        Self::new(wellness_services(), wellness_products(), membership_plans())
    }

    pub fn services(&self) -> &[WellnessService] {
        &self.services
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn find_service(&self, service_id: &ServiceId) -> Option<&WellnessService> {
        self.services.iter().find(|service| &service.id == service_id)
    }

    pub fn find_product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use crate::domain::catalog_item::{ProductId, ServiceId};

    use super::{membership_plans, Catalog};

    #[test]
    fn seeded_catalog_is_populated() {
        let catalog = Catalog::seeded();
        assert!(!catalog.services().is_empty());
        assert!(!catalog.products().is_empty());
        assert_eq!(catalog.memberships().len(), 3);
    }

    #[test]
    fn seed_ids_are_unique() {
        let catalog = Catalog::seeded();
        let service_ids: HashSet<_> = catalog.services().iter().map(|s| &s.id).collect();
        let product_ids: HashSet<_> = catalog.products().iter().map(|p| &p.id).collect();
        assert_eq!(service_ids.len(), catalog.services().len());
        assert_eq!(product_ids.len(), catalog.products().len());
    }

    #[test]
    fn lookup_by_id_finds_seeded_entries() {
        let catalog = Catalog::seeded();
        let service = catalog
            .find_service(&ServiceId("srv-002".to_string()))
            .expect("srv-002 should be seeded");
        assert_eq!(service.category, "Yoga");

        let product = catalog
            .find_product(&ProductId("prd-002".to_string()))
            .expect("prd-002 should be seeded");
        assert_eq!(product.price, Decimal::from(48_000));

        assert!(catalog.find_service(&ServiceId("srv-999".to_string())).is_none());
    }

    #[test]
    fn exactly_one_membership_is_flagged_popular() {
        let popular: Vec<_> =
            membership_plans().into_iter().filter(|plan| plan.is_popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Plus");
    }
}
