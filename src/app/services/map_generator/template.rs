//! HTML page template for track visualization

/// Page skeleton with placeholder slots filled by the generator.
///
/// Placeholders use the `__NAME__` convention so the JavaScript braces in
/// the template never collide with formatting machinery.
pub(super) const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>__TITLE__</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .header {
            text-align: center;
            margin-bottom: 20px;
        }
        .header h1 {
            color: #333;
            margin: 0;
        }
        .stats {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
            text-align: center;
        }
        .stats span {
            display: inline-block;
            margin: 0 20px;
            color: #666;
        }
        #map {
            height: 70vh;
            width: 100%;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .legend {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-top: 20px;
        }
        .legend h3 {
            margin-top: 0;
            color: #333;
        }
        .legend-item {
            display: inline-block;
            margin: 5px 15px 5px 0;
        }
        .legend-color {
            display: inline-block;
            width: 20px;
            height: 20px;
            margin-right: 8px;
            vertical-align: middle;
            border-radius: 50%;
        }
    </style>
</head>
<body>
    <div class="header">
        <h1>__TITLE__</h1>
    </div>

    <div class="stats">
        <span><strong>Total Points:</strong> __POINT_COUNT__</span>
        <span><strong>Start:</strong> __START_TIME__</span>
        <span><strong>End:</strong> __END_TIME__</span>
    </div>

    <div id="map"></div>

    <div class="legend">
        <h3>Legend</h3>
        <div class="legend-item">
            <span class="legend-color" style="background-color: #2ecc40;"></span>
            Start Point
        </div>
        <div class="legend-item">
            <span class="legend-color" style="background-color: #ff4136;"></span>
            End Point
        </div>
        <div class="legend-item">
            <span class="legend-color" style="background-color: #0074d9;"></span>
            Waypoints
        </div>
        <div class="legend-item">
            <span style="display: inline-block; width: 30px; height: 3px; background-color: __PATH_COLOR__; margin-right: 8px; vertical-align: middle;"></span>
            Trail
        </div>
    </div>

    <script>
        const points = __POINTS_JSON__;

        const map = L.map('map');
        L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
            maxZoom: 19,
            attribution: '&copy; OpenStreetMap contributors'
        }).addTo(map);

        function markerColor(index) {
            if (index === 0) return '#2ecc40';
            if (index === points.length - 1) return '#ff4136';
            return '#0074d9';
        }

        function popupContent(point, index) {
            const title = point.title || ('Point ' + (index + 1));
            let html = '<div style="min-width: 200px;">' +
                '<h3 style="margin: 0 0 10px 0;">' + title + '</h3>' +
                '<p><strong>Time:</strong> ' + point.time + '</p>' +
                '<p><strong>Location:</strong> ' + point.lat.toFixed(6) + ', ' + point.lng.toFixed(6) + '</p>' +
                '<p><strong>Sequence:</strong> ' + (index + 1) + ' of ' + points.length + '</p>';
            if (point.description) {
                html += '<p><strong>Description:</strong> ' + point.description + '</p>';
            }
            return html + '</div>';
        }

        points.forEach((point, index) => {
            L.circleMarker([point.lat, point.lng], {
                radius: index === 0 || index === points.length - 1 ? 9 : 6,
                color: '#000',
                weight: 1,
                fillColor: markerColor(index),
                fillOpacity: 1.0
            }).addTo(map).bindPopup(popupContent(point, index));
        });

        if (__SHOW_PATH__) {
            L.polyline(points.map(point => [point.lat, point.lng]), {
                color: '__PATH_COLOR__',
                weight: __PATH_WEIGHT__,
                opacity: __PATH_OPACITY__
            }).addTo(map);
        }

        if (points.length > 0) {
            map.fitBounds(L.latLngBounds(points.map(point => [point.lat, point.lng])), {
                maxZoom: __MAX_ZOOM__,
                padding: [20, 20]
            });
        }
    </script>
</body>
</html>
"#;

/// Fill placeholder slots in the page skeleton
pub(super) fn render(substitutions: &[(&str, String)]) -> String {
    let mut page = PAGE.to_string();
    for (placeholder, value) in substitutions {
        page = page.replace(placeholder, value);
    }
    page
}
