//! Development seed data.
//!
//! Mirrors the fixtures the catalog started with: two materials, one
//! product and a few print profiles. Applied only in development so
//! fresh environments have something to browse.

use domain_materials::{Caracteristicas, Material, MaterialType};
use domain_products::{Dimensiones, Product};
use domain_profiles::PrintProfile;

pub fn materials() -> Vec<Material> {
    vec![
        Material {
            id: "m001".to_string(),
            nombre: "PLA Premium".to_string(),
            tipo: MaterialType::Filamento,
            fabricante: "XYZ Filaments".to_string(),
            disponible: true,
            stock: 1000.0,
            precio_por_unidad: 25.99,
            caracteristicas: Caracteristicas {
                color: "Natural".to_string(),
                temperatura_impresion: 200,
                temperatura_plataforma: 60,
                resistencia_tensil: 70.0,
                diametro_filamento: Some(1.75),
                densidad: Some(1.25),
                ..Default::default()
            },
        },
        Material {
            id: "m002".to_string(),
            nombre: "Resina Standard".to_string(),
            tipo: MaterialType::Resina,
            fabricante: "UV Resins".to_string(),
            disponible: true,
            stock: 5000.0,
            precio_por_unidad: 45.99,
            caracteristicas: Caracteristicas {
                color: "Transparente".to_string(),
                temperatura_impresion: 25,
                temperatura_plataforma: 25,
                resistencia_tensil: 75.0,
                dureza: Some(70.0),
                viscosidad: Some(1000.0),
                tiempo_cura: Some(6),
                tolerancia: Some(0.05),
                ..Default::default()
            },
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![Product {
        id: "p001".to_string(),
        nombre: "Pieza de Soporte".to_string(),
        descripcion: "Soporte para impresión 3D".to_string(),
        precio_base: 15.99,
        dimensiones: Dimensiones {
            ancho: 10.0,
            alto: 5.0,
            profundo: 3.0,
        },
        categoria: "Soportes".to_string(),
        estado: "disponible".to_string(),
    }]
}

pub fn profiles() -> Vec<PrintProfile> {
    vec![
        PrintProfile {
            id: "pf001".to_string(),
            material_id: "m001".to_string(),
            nombre: "PLA Estándar".to_string(),
            descripcion: "Perfil de calidad estándar para PLA".to_string(),
            temperatura_nozzle: 200,
            temperatura_cama: 60,
            velocidad_impresion: 50,
            altura_capa: 0.2,
            relleno: 20,
            velocidad_retraccion: 45,
            distancia_retraccion: 5.0,
            velocidad_ventilador: 100,
            es_recomendado: true,
        },
        PrintProfile {
            id: "pf002".to_string(),
            material_id: "m001".to_string(),
            nombre: "PLA Rápido".to_string(),
            descripcion: "Borradores a alta velocidad".to_string(),
            temperatura_nozzle: 210,
            temperatura_cama: 60,
            velocidad_impresion: 80,
            altura_capa: 0.3,
            relleno: 10,
            velocidad_retraccion: 45,
            distancia_retraccion: 5.0,
            velocidad_ventilador: 100,
            es_recomendado: false,
        },
        PrintProfile {
            id: "pf003".to_string(),
            material_id: "m002".to_string(),
            nombre: "Resina Detalle".to_string(),
            descripcion: "Miniaturas y piezas de detalle".to_string(),
            temperatura_nozzle: 0,
            temperatura_cama: 0,
            velocidad_impresion: 0,
            altura_capa: 0.05,
            relleno: 100,
            velocidad_retraccion: 0,
            distancia_retraccion: 0.0,
            velocidad_ventilador: 0,
            es_recomendado: true,
        },
    ]
}
