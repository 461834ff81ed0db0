//! Строки интерфейса

use super::Translations;

pub static EN: Translations = Translations {
    app_title: "SentinelX",
    app_subtitle: "Disaster Monitoring & Alert Platform",
    nav_dashboard: "Dashboard",
    nav_sensor_feed: "Sensor Feed",
    nav_ai_predictions: "AI Predictions",
    nav_satellite_feed: "Satellite Feed",
    nav_misinformation: "Misinformation",
    nav_community_reports: "Community Reports",
    nav_flood_watch: "Flood Watch",
    nav_heatwave_alert: "Heatwave Alert",
    nav_map: "Disaster Map",
    nav_home: "Home",
    nav_alerts: "Alerts",
    nav_report: "Report",
    nav_settings: "Settings",
    coming_soon: "Coming Soon",
    coming_soon_hint: "This module is under development.",

    online: "Online",
    offline_mode: "Offline Mode",
    pending: "Pending",
    last_sync: "Last sync",
    sync_when_restored: "Data will sync when connection is restored",
    sync_now: "Sync Now",
    syncing: "Syncing...",
    pending_sync: "Pending Sync:",
    recently_synced: "Recently Synced:",
    more_items: "more items",
    simulate_offline: "Simulate offline",

    active_threats: "Active Threats",
    evacuation_zones: "Evacuation Zones",
    response_teams: "Response Teams",
    system_load: "System Load",
    threat_assessment: "AI Threat Assessment",
    confidence: "Confidence",
    last_updated: "Last updated",
    weather_stations: "Weather Stations",
    system_status: "System Status",
    timeline: "Event Timeline",

    sensors_title: "Ground Station Feed",
    sensors_subtitle: "Live IoT sensor data from barangay monitoring stations",
    live_data: "Live Data",
    refresh: "Refresh",
    refreshing: "Refreshing...",
    tab_live_feed: "Live Feed",
    tab_sensor_status: "Sensor Status",
    tab_connectivity: "Connectivity",
    sensors_count: "sensors",

    predictions_title: "AI Prediction Center",
    predictions_subtitle: "Machine learning models analyzing disaster risks",
    tab_active_predictions: "Active Predictions",
    tab_ai_models: "AI Models",
    tab_analytics: "Analytics",
    probability: "Prediction Probability",
    timeframe: "Timeframe",
    risk_factors: "Risk Factors",
    accuracy: "Accuracy",
    model_predictions: "Predictions",

    reports_title: "Community Reports",
    reports_subtitle: "Citizen-submitted incident reports with AI verification",
    status_filter: "Status",
    severity_filter: "Severity",
    all: "All",
    total_reports: "Total Reports",
    verified: "Verified",
    pending_review: "Pending Review",
    unique_reporters: "Unique Reporters",
    helpful: "Helpful",
    not_helpful: "Not helpful",
    ai_analysis: "AI Analysis",
    no_reports: "No reports match the selected filters",

    report_title_label: "Title",
    report_description_label: "Description",
    report_location_label: "Location",
    report_category_label: "Category",
    submit_report: "Submit Report",
    submitting: "Submitting...",
    report_queued_offline: "Saved offline, will sync when connection is restored",
    report_submitted: "Report submitted",

    settings_title: "Settings",
    push_notifications: "Push Notifications",
    sound_alerts: "Sound Alerts",
    dark_mode: "Dark Mode",
    auto_sync: "Sync on reconnect",
    auto_sync_tooltip: "Start syncing queued records as soon as the connection returns",
    language: "Language",

    welcome_next: "Next",
    welcome_back: "Back",
    welcome_skip: "Skip",
    get_started: "Get Started",
    phone_number: "Phone number",
    subscribe: "Subscribe to alerts",
    subscribed: "Subscribed",

    status: "Status:",
    log: "Log",
    clear: "Clear",
    cancel: "Cancel",
    log_empty: "Log is empty",
};

pub static FIL: Translations = Translations {
    app_title: "SentinelX",
    app_subtitle: "Plataporma sa Pagbabantay at Babala sa Sakuna",
    nav_dashboard: "Dashboard",
    nav_sensor_feed: "Datos ng Sensor",
    nav_ai_predictions: "Hula ng AI",
    nav_satellite_feed: "Datos ng Satellite",
    nav_misinformation: "Maling Impormasyon",
    nav_community_reports: "Ulat ng Komunidad",
    nav_flood_watch: "Bantay Baha",
    nav_heatwave_alert: "Babala sa Init",
    nav_map: "Mapa ng Sakuna",
    nav_home: "Home",
    nav_alerts: "Mga Babala",
    nav_report: "Mag-ulat",
    nav_settings: "Settings",
    coming_soon: "Malapit Na",
    coming_soon_hint: "Ginagawa pa ang bahaging ito.",

    online: "Online",
    offline_mode: "Offline Mode",
    pending: "Nakabinbin",
    last_sync: "Huling sync",
    sync_when_restored: "Isi-sync ang datos kapag bumalik ang koneksyon",
    sync_now: "I-sync Ngayon",
    syncing: "Nagsi-sync...",
    pending_sync: "Naghihintay ng Sync:",
    recently_synced: "Kamakailang Na-sync:",
    more_items: "pa",
    simulate_offline: "Gayahin ang offline",

    active_threats: "Aktibong Banta",
    evacuation_zones: "Lugar ng Paglikas",
    response_teams: "Mga Rescue Team",
    system_load: "Karga ng Sistema",
    threat_assessment: "Pagtatasa ng Banta (AI)",
    confidence: "Kumpiyansa",
    last_updated: "Huling update",
    weather_stations: "Mga Weather Station",
    system_status: "Kalagayan ng Sistema",
    timeline: "Takbo ng mga Pangyayari",

    sensors_title: "Datos ng Ground Station",
    sensors_subtitle: "Live na datos mula sa mga sensor ng barangay",
    live_data: "Live na Datos",
    refresh: "I-refresh",
    refreshing: "Nire-refresh...",
    tab_live_feed: "Live Feed",
    tab_sensor_status: "Kalagayan ng Sensor",
    tab_connectivity: "Koneksyon",
    sensors_count: "sensor",

    predictions_title: "Sentro ng Hula ng AI",
    predictions_subtitle: "Mga modelong sumusuri sa panganib ng sakuna",
    tab_active_predictions: "Aktibong Hula",
    tab_ai_models: "Mga Modelo",
    tab_analytics: "Pagsusuri",
    probability: "Posibilidad",
    timeframe: "Panahon",
    risk_factors: "Mga Salik ng Panganib",
    accuracy: "Katumpakan",
    model_predictions: "Mga Hula",

    reports_title: "Ulat ng Komunidad",
    reports_subtitle: "Mga ulat ng mamamayan na sinuri ng AI",
    status_filter: "Katayuan",
    severity_filter: "Kalubhaan",
    all: "Lahat",
    total_reports: "Kabuuang Ulat",
    verified: "Beripikado",
    pending_review: "Sinusuri Pa",
    unique_reporters: "Mga Nag-ulat",
    helpful: "Nakatulong",
    not_helpful: "Hindi nakatulong",
    ai_analysis: "Pagsusuri ng AI",
    no_reports: "Walang ulat na tugma sa filter",

    report_title_label: "Pamagat",
    report_description_label: "Paglalarawan",
    report_location_label: "Lokasyon",
    report_category_label: "Kategorya",
    submit_report: "Ipadala ang Ulat",
    submitting: "Ipinapadala...",
    report_queued_offline: "Naka-save offline, isi-sync kapag may koneksyon",
    report_submitted: "Naipadala ang ulat",

    settings_title: "Settings",
    push_notifications: "Push Notifications",
    sound_alerts: "Tunog ng Babala",
    dark_mode: "Dark Mode",
    auto_sync: "Mag-sync pagbalik ng koneksyon",
    auto_sync_tooltip: "Simulan ang sync kapag bumalik ang koneksyon",
    language: "Wika",

    welcome_next: "Susunod",
    welcome_back: "Bumalik",
    welcome_skip: "Laktawan",
    get_started: "Magsimula",
    phone_number: "Numero ng telepono",
    subscribe: "Mag-subscribe sa babala",
    subscribed: "Naka-subscribe",

    status: "Katayuan:",
    log: "Log",
    clear: "Burahin",
    cancel: "Kanselahin",
    log_empty: "Walang laman ang log",
};
