//! Static sample records.
//!
//! Collections without a backend endpoint are served from here, and the
//! disaster list falls back to them when the backend cannot be reached.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{
    Alert, AlertStatus, DangerZone, Disaster, GeoPoint, Resource, ResourceCounts, RouteStatus,
    SafeRoute, Severity, SosRequest, SosStatus, Volunteer, VolunteerStatus,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single()
}

fn s(value: &str) -> String {
    value.to_string()
}

pub fn disasters() -> Vec<Disaster> {
    vec![
        Disaster {
            id: s("sample-d1"),
            kind: s("flood"),
            description: s("Yamuna overflow affecting low-lying colonies"),
            location: GeoPoint::new(28.6139, 77.2090),
            radius: 12.0,
            resources: ResourceCounts { food: 400, water: 900, medical: 60, shelter: 120 },
            active: true,
            created_at: at(2024, 7, 2, 6),
        },
        Disaster {
            id: s("sample-d2"),
            kind: s("earthquake"),
            description: s("Magnitude 5.4 tremor, structural damage reported"),
            location: GeoPoint::new(31.1048, 77.1734),
            radius: 6.5,
            resources: ResourceCounts { food: 150, water: 300, medical: 80, shelter: 40 },
            active: true,
            created_at: at(2024, 6, 28, 14),
        },
        Disaster {
            id: s("sample-d3"),
            kind: s("fire"),
            description: s("Warehouse fire in industrial area"),
            location: GeoPoint::new(19.0760, 72.8777),
            radius: 1.2,
            resources: ResourceCounts { food: 0, water: 200, medical: 25, shelter: 0 },
            active: false,
            created_at: at(2024, 6, 20, 22),
        },
        Disaster {
            id: s("sample-d4"),
            kind: s("cyclone"),
            description: s("Cyclonic storm making landfall on the coast"),
            location: GeoPoint::new(19.8135, 85.8312),
            radius: 35.0,
            resources: ResourceCounts { food: 1200, water: 2500, medical: 200, shelter: 600 },
            active: true,
            created_at: at(2024, 5, 25, 3),
        },
        Disaster {
            id: s("sample-d5"),
            kind: s("flood"),
            description: s("Flash flood after cloudburst"),
            location: GeoPoint::new(26.1445, 91.7362),
            radius: 3.0,
            resources: ResourceCounts { food: 80, water: 150, medical: 10, shelter: 30 },
            active: false,
            created_at: at(2024, 5, 10, 17),
        },
    ]
}

pub fn volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: s("v1"),
            name: s("Rajesh Kumar"),
            contact: s("+91 98100 11223"),
            specialization: s("Medical"),
            location: s("Delhi"),
            status: VolunteerStatus::Available,
            rating: 4.8,
            completed_missions: 23,
        },
        Volunteer {
            id: s("v2"),
            name: s("Priya Sharma"),
            contact: s("+91 98200 44556"),
            specialization: s("Search & Rescue"),
            location: s("Mumbai"),
            status: VolunteerStatus::Busy,
            rating: 4.6,
            completed_missions: 17,
        },
        Volunteer {
            id: s("v3"),
            name: s("Amit Singh"),
            contact: s("+91 98110 77889"),
            specialization: s("Search & Rescue"),
            location: s("New Delhi"),
            status: VolunteerStatus::Available,
            rating: 4.5,
            completed_missions: 12,
        },
        Volunteer {
            id: s("v4"),
            name: s("Sneha Patel"),
            contact: s("+91 98250 33445"),
            specialization: s("Logistics"),
            location: s("Delhi"),
            status: VolunteerStatus::Training,
            rating: 4.2,
            completed_missions: 3,
        },
        Volunteer {
            id: s("v5"),
            name: s("Vikram Reddy"),
            contact: s("+91 98490 66778"),
            specialization: s("Communication"),
            location: s("Hyderabad"),
            status: VolunteerStatus::Offline,
            rating: 4.0,
            completed_missions: 8,
        },
    ]
}

pub fn sos_requests() -> Vec<SosRequest> {
    vec![
        SosRequest {
            id: s("sos1"),
            requester: s("Anita Desai"),
            location: s("Mayur Vihar, Delhi"),
            kind: s("medical"),
            severity: Severity::Critical,
            message: s("Elderly person needs oxygen, water entering ground floor"),
            status: SosStatus::Pending,
            assigned_volunteer: None,
            created_at: at(2024, 7, 2, 8),
        },
        SosRequest {
            id: s("sos2"),
            requester: s("Mohammed Irfan"),
            location: s("Kurla, Mumbai"),
            kind: s("rescue"),
            severity: Severity::High,
            message: s("Family of four stranded on rooftop"),
            status: SosStatus::Assigned,
            assigned_volunteer: Some(s("v2")),
            created_at: at(2024, 7, 2, 9),
        },
        SosRequest {
            id: s("sos3"),
            requester: s("Lakshmi Nair"),
            location: s("Shimla"),
            kind: s("shelter"),
            severity: Severity::Medium,
            message: s("House cracked after tremor, need temporary shelter"),
            status: SosStatus::EnRoute,
            assigned_volunteer: Some(s("v3")),
            created_at: at(2024, 6, 28, 16),
        },
        SosRequest {
            id: s("sos4"),
            requester: s("Harpreet Kaur"),
            location: s("Rohini, Delhi"),
            kind: s("food"),
            severity: Severity::Low,
            message: s("Community kitchen running out of supplies"),
            status: SosStatus::Resolved,
            assigned_volunteer: Some(s("v1")),
            created_at: at(2024, 6, 30, 12),
        },
        SosRequest {
            id: s("sos5"),
            requester: s("Suresh Das"),
            location: s("Puri, Odisha"),
            kind: s("rescue"),
            severity: Severity::Critical,
            message: s("Fishing boat missing since landfall"),
            status: SosStatus::Pending,
            assigned_volunteer: None,
            created_at: at(2024, 5, 25, 6),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: s("r1"),
            name: s("First aid kit"),
            category: s("medical"),
            location: s("Delhi central depot"),
            total_stock: 500,
            available_stock: 40,
            allocated_stock: 460,
            critical_level: 50,
            expiry: NaiveDate::from_ymd_opt(2025, 12, 31),
        },
        Resource {
            id: s("r2"),
            name: s("Rice (25kg bag)"),
            category: s("food"),
            location: s("Mumbai warehouse"),
            total_stock: 2000,
            available_stock: 1500,
            allocated_stock: 500,
            critical_level: 200,
            expiry: NaiveDate::from_ymd_opt(2025, 3, 1),
        },
        Resource {
            id: s("r3"),
            name: s("Drinking water (1L)"),
            category: s("water"),
            location: s("Delhi central depot"),
            total_stock: 10000,
            available_stock: 2500,
            allocated_stock: 7500,
            critical_level: 1000,
            expiry: None,
        },
        Resource {
            id: s("r4"),
            name: s("Family tent"),
            category: s("shelter"),
            location: s("Bhubaneswar hub"),
            total_stock: 300,
            available_stock: 150,
            allocated_stock: 150,
            critical_level: 30,
            expiry: None,
        },
        Resource {
            id: s("r5"),
            name: s("Water purification kit"),
            category: s("water"),
            location: s("Guwahati hub"),
            total_stock: 800,
            available_stock: 720,
            allocated_stock: 80,
            critical_level: 100,
            expiry: NaiveDate::from_ymd_opt(2026, 6, 30),
        },
    ]
}

pub fn danger_zones() -> Vec<DangerZone> {
    vec![
        DangerZone {
            id: s("z1"),
            name: s("Yamuna floodplain"),
            kind: s("flood"),
            severity: Severity::Critical,
            location: s("East Delhi"),
            radius: 8.0,
            active: true,
            reported_at: at(2024, 7, 1, 20),
        },
        DangerZone {
            id: s("z2"),
            name: s("Landslide corridor NH-5"),
            kind: s("landslide"),
            severity: Severity::High,
            location: s("Shimla district"),
            radius: 4.0,
            active: true,
            reported_at: at(2024, 6, 29, 7),
        },
        DangerZone {
            id: s("z3"),
            name: s("Chemical plant perimeter"),
            kind: s("industrial"),
            severity: Severity::Medium,
            location: s("Thane"),
            radius: 1.5,
            active: false,
            reported_at: at(2024, 6, 10, 11),
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: s("a1"),
            title: s("Evacuate low-lying areas"),
            message: s("Move to relief camps at government schools immediately"),
            severity: Severity::Critical,
            target_area: s("East Delhi"),
            status: AlertStatus::Sent,
            recipients: 48000,
            created_at: at(2024, 7, 2, 5),
        },
        Alert {
            id: s("a2"),
            title: s("Aftershock advisory"),
            message: s("Stay outdoors and away from damaged buildings"),
            severity: Severity::High,
            target_area: s("Shimla"),
            status: AlertStatus::Sent,
            recipients: 12500,
            created_at: at(2024, 6, 28, 15),
        },
        Alert {
            id: s("a3"),
            title: s("Cyclone preparedness"),
            message: s("Secure loose objects and stock drinking water"),
            severity: Severity::Medium,
            target_area: s("Odisha coast"),
            status: AlertStatus::Scheduled,
            recipients: 90000,
            created_at: at(2024, 5, 23, 9),
        },
        Alert {
            id: s("a4"),
            title: s("Water supply restored"),
            message: s("Municipal supply resumes in affected wards"),
            severity: Severity::Low,
            target_area: s("Mumbai"),
            status: AlertStatus::Draft,
            recipients: 0,
            created_at: None,
        },
    ]
}

pub fn safe_routes() -> Vec<SafeRoute> {
    vec![
        SafeRoute {
            id: s("sr1"),
            name: s("Ring Road north"),
            origin: s("Mayur Vihar"),
            destination: s("Civil Lines relief camp"),
            distance_km: 14.5,
            status: RouteStatus::Open,
            capacity: 3000,
        },
        SafeRoute {
            id: s("sr2"),
            name: s("NH-44 corridor"),
            origin: s("Yamuna Bank"),
            destination: s("Karnal shelter"),
            distance_km: 120.0,
            status: RouteStatus::Congested,
            capacity: 5000,
        },
        SafeRoute {
            id: s("sr3"),
            name: s("Coastal highway"),
            origin: s("Puri"),
            destination: s("Bhubaneswar"),
            distance_km: 62.0,
            status: RouteStatus::Closed,
            capacity: 4000,
        },
    ]
}
