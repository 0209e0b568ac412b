//! Built-in sample data: the VM inventory served by the mock provider and
//! the target datacenters used when no datacenter file is configured

use super::datacenter::{Datacenter, OpenShiftCluster, ResourceQuota, SiteResources, SiteStatus};
use super::Vm;

type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i32,
    i32,
    i32,
);

#[rustfmt::skip]
const SAMPLE_ROWS: &[SampleRow] = &[
    ("1", "GB00001", "Payment Service", "US-East", "C1", 4, 8, 250),
    ("2", "GB00002", "Email Service", "US-East", "C1", 2, 4, 100),
    ("3", "GB00003", "Auth Service", "US-East", "C1", 2, 8, 200),
    ("4", "GB00004", "API Gateway", "US-East", "C1", 4, 8, 300),
    ("5", "GB00005", "Customer Portal", "US-East", "C2", 8, 32, 1500),
    ("6", "GB00006", "Data Warehouse", "US-East", "C2", 16, 64, 2000),
    ("7", "GB00007", "File Server", "US-East", "C2", 8, 32, 1800),
    ("8", "GB00008", "Firewall Appliance", "US-East", "C3", 4, 16, 500),
    ("9", "GB00009", "Load Balancer", "US-East", "C3", 4, 16, 400),
    ("10", "GB00010", "Cache Server", "US-West", "C1", 2, 8, 200),
    ("11", "GB00011", "Web Server", "US-West", "C1", 4, 8, 250),
    ("12", "GB00012", "DNS Server", "US-West", "C1", 2, 4, 100),
    ("13", "GB00013", "Proxy Server", "US-West", "C1", 4, 8, 300),
    ("14", "GB00014", "Media Server", "US-West", "C2", 8, 32, 2500),
    ("15", "GB00015", "Backup Server", "US-West", "C2", 8, 32, 3000),
    ("16", "GB00016", "Security Appliance", "US-West", "C4", 8, 32, 1500),
    ("17", "GB00017", "SAN Controller", "US-West", "C5", 4, 16, 500),
    ("18", "GB00018", "Message Queue", "EU-Central", "C1", 4, 8, 300),
    ("19", "GB00019", "Session Store", "EU-Central", "C1", 2, 8, 200),
    ("20", "GB00020", "Config Server", "EU-Central", "C1", 2, 4, 100),
    ("21", "GB00021", "Logging Service", "EU-Central", "C1", 4, 8, 400),
    ("22", "GB00022", "Metrics Server", "EU-Central", "C1", 2, 8, 250),
    ("23", "GB00023", "Analytics Engine", "EU-Central", "C2", 16, 64, 2000),
    ("24", "GB00024", "Document Store", "EU-Central", "C2", 8, 32, 1800),
    ("25", "GB00025", "Archive Server", "EU-Central", "C2", 8, 32, 2200),
    ("26", "GB00026", "VPN Appliance", "EU-Central", "C3", 4, 16, 300),
    ("27", "GB00027", "Monitoring Tool", "EU-Central", "C3", 4, 16, 600),
    ("28", "GB00028", "IDS Appliance", "EU-Central", "C4", 8, 32, 1200),
    ("29", "GB00029", "Mobile API", "APAC", "C1", 4, 8, 300),
    ("30", "GB00030", "Search Service", "APAC", "C1", 4, 8, 400),
    ("31", "GB00031", "Notification Service", "APAC", "C1", 2, 8, 200),
    ("32", "GB00032", "Job Scheduler", "APAC", "C1", 2, 4, 150),
    ("33", "GB00033", "Database Server", "APAC", "C2", 16, 64, 2500),
    ("34", "GB00034", "CRM Application", "APAC", "C2", 8, 32, 1600),
    ("35", "GB00035", "WAF Appliance", "APAC", "C3", 4, 16, 500),
    ("36", "GB00036", "Storage Gateway", "APAC", "C5", 4, 16, 600),
    ("37", "GB00037", "Report Generator", "US-East", "C1", 2, 8, 200),
    ("38", "GB00038", "ETL Service", "EU-Central", "C2", 8, 32, 1400),
    ("39", "GB00039", "Content Server", "US-West", "C1", 4, 8, 350),
    ("40", "GB00040", "Streaming Server", "APAC", "C2", 8, 32, 1700),
];

/// The 40-VM demonstration inventory spread over four regions
pub fn sample_inventory() -> Vec<Vm> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, name, service, region, category, cpu, memory, storage)| {
            Vm::new(id, name, service, region, category, cpu, memory, storage)
        })
        .collect()
}

/// (available, total) for compute (cores), memory (GB), storage (TB), network (Gbps)
type Quotas = [(f64, f64); 4];

/// Name, status, quotas, current VMs, VM capacity
type ClusterRow = (&'static str, SiteStatus, Quotas, u32, u32);

struct SiteRow {
    country: &'static str,
    code: &'static str,
    location: &'static str,
    status: SiteStatus,
    quotas: Quotas,
    clusters: &'static [ClusterRow],
}

#[rustfmt::skip]
const SITE_ROWS: &[SiteRow] = &[
    SiteRow {
        country: "Argentina",
        code: "AR",
        location: "OLLEROS DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(320.0, 480.0), (640.0, 960.0), (25.0, 40.0), (12.0, 18.0)],
        clusters: &[
            ("AR-OLLEROS-OCP-01", SiteStatus::Operational, [(160.0, 240.0), (320.0, 480.0), (12.0, 20.0), (6.0, 9.0)], 35, 60),
            ("AR-OLLEROS-OCP-02", SiteStatus::Operational, [(160.0, 240.0), (320.0, 480.0), (13.0, 20.0), (6.0, 9.0)], 28, 60),
        ],
    },
    SiteRow {
        country: "Argentina",
        code: "AR",
        location: "PACHECO DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(280.0, 400.0), (560.0, 800.0), (20.0, 35.0), (10.0, 15.0)],
        clusters: &[
            ("AR-PACHECO-OCP-01", SiteStatus::Operational, [(280.0, 400.0), (560.0, 800.0), (20.0, 35.0), (10.0, 15.0)], 42, 100),
        ],
    },
    SiteRow {
        country: "Australia",
        code: "AU",
        location: "CANBERRA DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(450.0, 600.0), (900.0, 1200.0), (35.0, 50.0), (16.0, 22.0)],
        clusters: &[
            ("AU-CANBERRA-OCP-01", SiteStatus::Operational, [(220.0, 300.0), (440.0, 600.0), (18.0, 25.0), (8.0, 11.0)], 48, 75),
            ("AU-CANBERRA-OCP-02", SiteStatus::Operational, [(230.0, 300.0), (460.0, 600.0), (17.0, 25.0), (8.0, 11.0)], 52, 75),
        ],
    },
    SiteRow {
        country: "Australia",
        code: "AU",
        location: "GLOBAL SWITCH DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(520.0, 700.0), (1040.0, 1400.0), (40.0, 55.0), (18.0, 25.0)],
        clusters: &[
            ("AU-GLOBALSW-OCP-01", SiteStatus::Operational, [(260.0, 350.0), (520.0, 700.0), (20.0, 27.5), (9.0, 12.5)], 58, 87),
            ("AU-GLOBALSW-OCP-02", SiteStatus::Operational, [(260.0, 350.0), (520.0, 700.0), (20.0, 27.5), (9.0, 12.5)], 62, 87),
        ],
    },
    SiteRow {
        country: "United Kingdom",
        code: "GB",
        location: "ARK DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(680.0, 920.0), (1360.0, 1840.0), (58.0, 82.0), (25.0, 37.0)],
        clusters: &[
            ("GB-ARK-OCP-01", SiteStatus::Operational, [(230.0, 307.0), (460.0, 614.0), (20.0, 27.0), (8.0, 12.0)], 68, 95),
            ("GB-ARK-OCP-02", SiteStatus::Operational, [(225.0, 307.0), (450.0, 614.0), (19.0, 27.0), (8.0, 12.0)], 72, 95),
            ("GB-ARK-OCP-03", SiteStatus::Operational, [(225.0, 306.0), (450.0, 612.0), (19.0, 28.0), (9.0, 13.0)], 65, 95),
        ],
    },
    SiteRow {
        country: "United Kingdom",
        code: "GB",
        location: "SLOUGH DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(720.0, 1000.0), (1440.0, 2000.0), (62.0, 90.0), (27.0, 40.0)],
        clusters: &[
            ("GB-SLOUGH-OCP-01", SiteStatus::Operational, [(240.0, 333.0), (480.0, 666.0), (21.0, 30.0), (9.0, 13.0)], 75, 105),
            ("GB-SLOUGH-OCP-02", SiteStatus::Operational, [(240.0, 333.0), (480.0, 666.0), (21.0, 30.0), (9.0, 13.0)], 78, 105),
            ("GB-SLOUGH-OCP-03", SiteStatus::Operational, [(240.0, 334.0), (480.0, 668.0), (20.0, 30.0), (9.0, 14.0)], 82, 105),
        ],
    },
    SiteRow {
        country: "United Kingdom",
        code: "GB",
        location: "SOUTH YORKSHIRE DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(620.0, 860.0), (1240.0, 1720.0), (54.0, 78.0), (24.0, 35.0)],
        clusters: &[
            ("GB-SYORK-OCP-01", SiteStatus::Operational, [(310.0, 430.0), (620.0, 860.0), (27.0, 39.0), (12.0, 17.5)], 92, 125),
            ("GB-SYORK-OCP-02", SiteStatus::Operational, [(310.0, 430.0), (620.0, 860.0), (27.0, 39.0), (12.0, 17.5)], 88, 125),
        ],
    },
    SiteRow {
        country: "United Kingdom",
        code: "GB",
        location: "WAKEFIELD DATA CENTRE",
        status: SiteStatus::Warning,
        quotas: [(280.0, 780.0), (560.0, 1560.0), (25.0, 70.0), (12.0, 32.0)],
        clusters: &[
            ("GB-WAKE-OCP-01", SiteStatus::Warning, [(140.0, 390.0), (280.0, 780.0), (12.0, 35.0), (6.0, 16.0)], 135, 150),
            ("GB-WAKE-OCP-02", SiteStatus::Operational, [(140.0, 390.0), (280.0, 780.0), (13.0, 35.0), (6.0, 16.0)], 128, 150),
        ],
    },
    SiteRow {
        country: "United States Of America",
        code: "US",
        location: "NORTHLAKE DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(820.0, 1120.0), (1640.0, 2240.0), (70.0, 100.0), (30.0, 45.0)],
        clusters: &[
            ("US-NLAKE-OCP-01", SiteStatus::Operational, [(275.0, 373.0), (550.0, 746.0), (23.0, 33.0), (10.0, 15.0)], 85, 115),
            ("US-NLAKE-OCP-02", SiteStatus::Operational, [(275.0, 373.0), (550.0, 746.0), (24.0, 33.0), (10.0, 15.0)], 82, 115),
            ("US-NLAKE-OCP-03", SiteStatus::Operational, [(270.0, 374.0), (540.0, 748.0), (23.0, 34.0), (10.0, 15.0)], 88, 115),
        ],
    },
    SiteRow {
        country: "United States Of America",
        code: "US",
        location: "NY6 DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(880.0, 1200.0), (1760.0, 2400.0), (75.0, 108.0), (32.0, 48.0)],
        clusters: &[
            ("US-NY6-OCP-01", SiteStatus::Operational, [(293.0, 400.0), (586.0, 800.0), (25.0, 36.0), (11.0, 16.0)], 95, 130),
            ("US-NY6-OCP-02", SiteStatus::Operational, [(293.0, 400.0), (586.0, 800.0), (25.0, 36.0), (11.0, 16.0)], 92, 130),
            ("US-NY6-OCP-03", SiteStatus::Operational, [(294.0, 400.0), (588.0, 800.0), (25.0, 36.0), (10.0, 16.0)], 98, 130),
        ],
    },
    SiteRow {
        country: "United States Of America",
        code: "US",
        location: "TELX DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(760.0, 1040.0), (1520.0, 2080.0), (65.0, 94.0), (28.0, 42.0)],
        clusters: &[
            ("US-TELX-OCP-01", SiteStatus::Operational, [(380.0, 520.0), (760.0, 1040.0), (32.0, 47.0), (14.0, 21.0)], 105, 145),
            ("US-TELX-OCP-02", SiteStatus::Operational, [(380.0, 520.0), (760.0, 1040.0), (33.0, 47.0), (14.0, 21.0)], 102, 145),
        ],
    },
    SiteRow {
        country: "United States Of America",
        code: "US",
        location: "VERNON HILLS DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(700.0, 960.0), (1400.0, 1920.0), (60.0, 86.0), (26.0, 38.0)],
        clusters: &[
            ("US-VHILLS-OCP-01", SiteStatus::Operational, [(350.0, 480.0), (700.0, 960.0), (30.0, 43.0), (13.0, 19.0)], 98, 135),
            ("US-VHILLS-OCP-02", SiteStatus::Operational, [(350.0, 480.0), (700.0, 960.0), (30.0, 43.0), (13.0, 19.0)], 95, 135),
        ],
    },
    SiteRow {
        country: "Hong Kong",
        code: "HK",
        location: "SHEK MUN DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(580.0, 800.0), (1160.0, 1600.0), (50.0, 72.0), (22.0, 32.0)],
        clusters: &[
            ("HK-SHEKMUN-OCP-01", SiteStatus::Operational, [(290.0, 400.0), (580.0, 800.0), (25.0, 36.0), (11.0, 16.0)], 78, 110),
            ("HK-SHEKMUN-OCP-02", SiteStatus::Operational, [(290.0, 400.0), (580.0, 800.0), (25.0, 36.0), (11.0, 16.0)], 75, 110),
        ],
    },
    SiteRow {
        country: "Hong Kong",
        code: "HK",
        location: "TSEUNG KWAN O DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(640.0, 880.0), (1280.0, 1760.0), (55.0, 78.0), (24.0, 35.0)],
        clusters: &[
            ("HK-TKO-OCP-01", SiteStatus::Operational, [(320.0, 440.0), (640.0, 880.0), (27.0, 39.0), (12.0, 17.5)], 85, 120),
            ("HK-TKO-OCP-02", SiteStatus::Operational, [(320.0, 440.0), (640.0, 880.0), (28.0, 39.0), (12.0, 17.5)], 82, 120),
        ],
    },
    SiteRow {
        country: "India",
        code: "IN",
        location: "MUMCDC DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(680.0, 920.0), (1360.0, 1840.0), (58.0, 82.0), (25.0, 37.0)],
        clusters: &[
            ("IN-MUMCDC-OCP-01", SiteStatus::Operational, [(340.0, 460.0), (680.0, 920.0), (29.0, 41.0), (12.0, 18.5)], 88, 125),
            ("IN-MUMCDC-OCP-02", SiteStatus::Operational, [(340.0, 460.0), (680.0, 920.0), (29.0, 41.0), (13.0, 18.5)], 92, 125),
        ],
    },
    SiteRow {
        country: "India",
        code: "IN",
        location: "NAVI MUMBAI, CTRL-S DATA CENTRE",
        status: SiteStatus::Operational,
        quotas: [(550.0, 760.0), (1100.0, 1520.0), (48.0, 68.0), (21.0, 30.0)],
        clusters: &[
            ("IN-NMUMBAI-OCP-01", SiteStatus::Operational, [(275.0, 380.0), (550.0, 760.0), (24.0, 34.0), (10.0, 15.0)], 72, 105),
            ("IN-NMUMBAI-OCP-02", SiteStatus::Operational, [(275.0, 380.0), (550.0, 760.0), (24.0, 34.0), (11.0, 15.0)], 75, 105),
        ],
    },
];

fn quota(amounts: (f64, f64), unit: &str) -> ResourceQuota {
    ResourceQuota::new(amounts.0, amounts.1, unit)
}

fn site_resources(quotas: &Quotas) -> SiteResources {
    SiteResources {
        compute: quota(quotas[0], "cores"),
        memory: quota(quotas[1], "GB"),
        storage: quota(quotas[2], "TB"),
        network: quota(quotas[3], "Gbps"),
    }
}

/// Target datacenters of the MiOA platform, grouped by country in file order
pub fn sample_datacenters() -> Vec<Datacenter> {
    SITE_ROWS
        .iter()
        .map(|site| Datacenter {
            country: site.country.to_string(),
            country_code: site.code.to_string(),
            location_name: site.location.to_string(),
            status: site.status,
            resources: site_resources(&site.quotas),
            open_shift_clusters: site
                .clusters
                .iter()
                .map(|&(name, status, quotas, current_vms, max_capacity)| {
                    let resources = site_resources(&quotas);
                    OpenShiftCluster {
                        name: name.to_string(),
                        status,
                        compute: resources.compute,
                        memory: resources.memory,
                        storage: resources.storage,
                        network: resources.network,
                        current_vms,
                        max_capacity,
                    }
                })
                .collect(),
        })
        .collect()
}
