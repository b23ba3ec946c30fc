//! The dashboard page, embedded in the binary.
//!
//! Rendering substitutes the current snapshot into the page as a JSON literal;
//! the script applies it immediately, then keeps polling `/data`.

use crate::types::Snapshot;

const SNAPSHOT_TOKEN: &str = "__SNAPSHOT__";

pub fn render_index(snapshot: &Snapshot) -> String {
    let json = serde_json::to_string(snapshot).unwrap_or_else(|_| "null".into());
    // `<` only occurs inside JSON string values; escaping it keeps a platform
    // string from terminating the script element early.
    let json = json.replace('<', "\\u003c");
    PAGE.replace(SNAPSHOT_TOKEN, &json)
}

const PAGE: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <title>System Monitor</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <script src="https://cdnjs.cloudflare.com/ajax/libs/Chart.js/3.7.0/chart.min.js"></script>
    <style>
      body {
        font-family: "Poppins", Arial, sans-serif;
        line-height: 1.6;
        background-color: #1a1b26;
        color: #a9b1d6;
        margin: 0;
        padding: 20px;
      }
      h1 {
        color: #c0caf5;
      }
      .info-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 10px;
        margin-bottom: 20px;
      }
      .info-item {
        display: flex;
        align-items: center;
        padding: 10px;
        background-color: #24283b;
        border-radius: 6px;
      }
      .info-icon {
        font-size: 24px;
        margin-right: 10px;
        color: #7aa2f7;
      }
      .info-label {
        display: block;
        font-size: 14px;
        color: #565f89;
      }
      .info-value {
        font-size: 16px;
        font-weight: bold;
        color: #c0caf5;
      }
      .grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 16px;
      }
      .card {
        background-color: #24283b;
        border-radius: 8px;
        padding: 16px;
      }
      .card h3 {
        margin-top: 0;
        color: #7aa2f7;
      }
      .card p {
        font-size: 28px;
        font-weight: bold;
        margin: 4px 0;
        color: #c0caf5;
      }
      .subtitle {
        font-size: 14px;
        color: #565f89;
      }
      #updateTime {
        text-align: center;
        font-style: italic;
        margin-top: 20px;
        color: #565f89;
      }
    </style>
  </head>
  <body>
    <h1>System Monitor</h1>

    <div class="info-grid">
      <div class="info-item">
        <span class="info-icon">&#128421;</span>
        <div>
          <span class="info-label">Operating System</span>
          <span class="info-value" id="os"></span>
        </div>
      </div>
      <div class="info-item">
        <span class="info-icon">&#128290;</span>
        <div>
          <span class="info-label">CPU</span>
          <span class="info-value" id="cpu"></span>
        </div>
      </div>
      <div class="info-item">
        <span class="info-icon">&#128190;</span>
        <div>
          <span class="info-label">Total Memory</span>
          <span class="info-value" id="totalMemory"></span>
        </div>
      </div>
      <div class="info-item">
        <span class="info-icon">&#128189;</span>
        <div>
          <span class="info-label">Disk Space</span>
          <span class="info-value" id="diskSpace"></span>
        </div>
      </div>
      <div class="info-item">
        <span class="info-icon">&#127968;</span>
        <div>
          <span class="info-label">Hostname</span>
          <span class="info-value" id="hostname"></span>
        </div>
      </div>
      <div class="info-item">
        <span class="info-icon">&#128268;</span>
        <div>
          <span class="info-label">Network</span>
          <span class="info-value" id="network"></span>
        </div>
      </div>
    </div>

    <div class="grid">
      <div class="card">
        <h3>CPU</h3>
        <p id="cpuUsage"></p>
        <div class="subtitle" id="cpuLoad"></div>
        <canvas id="cpuChart"></canvas>
      </div>
      <div class="card">
        <h3>Memory</h3>
        <p id="memoryUsage"></p>
        <div class="subtitle" id="memoryDetails"></div>
      </div>
      <div class="card">
        <h3>Disk</h3>
        <p id="diskUsage"></p>
        <div class="subtitle" id="diskDetails"></div>
      </div>
      <div class="card">
        <h3>Network</h3>
        <p id="networkUsage"></p>
        <div class="subtitle">cumulative since boot</div>
      </div>
    </div>

    <p id="updateTime">Last updated: <span id="lastUpdateTime"></span></p>

    <script>
      const POLL_MS = 2000;
      const HISTORY_CAP = 10;
      const INITIAL = __SNAPSHOT__;

      const cpuHistory = { labels: [], points: [] };
      let cpuChart = null;

      // FIFO: oldest sample leaves once the cap is reached.
      function pushCapped(arr, v) {
        arr.push(v);
        if (arr.length > HISTORY_CAP) {
          arr.shift();
        }
      }

      function setText(id, text) {
        document.getElementById(id).textContent = text;
      }

      function applySnapshot(data) {
        setText("os", data.system + " " + data.release);
        setText("cpu", data.processor);
        setText("totalMemory", data.memory.total + " GB");
        setText("diskSpace", data.disk.total + " GB");
        setText("hostname", data.node_name);
        setText("network", data.network_info);

        setText("cpuUsage", data.cpu_usage + "%");
        setText("cpuLoad", "Load " + data.cpu_load);
        setText("memoryUsage", data.memory.percent + "%");
        setText("memoryDetails", data.memory.used + " GB / " + data.memory.total + " GB");
        setText("diskUsage", data.disk.percent + "%");
        setText("diskDetails", data.disk.used + " GB / " + data.disk.total + " GB");
        setText("networkUsage", "↓ " + data.network.bytes_recv + " MB ↑ " + data.network.bytes_sent + " MB");
        setText("lastUpdateTime", new Date().toLocaleTimeString());

        pushCapped(cpuHistory.labels, new Date().toLocaleTimeString());
        pushCapped(cpuHistory.points, data.cpu_usage);
        cpuChart.update();
      }

      // Failures skip this tick; the next interval retries naturally.
      function poll() {
        fetch("/data")
          .then((response) => response.json())
          .then((data) => applySnapshot(data))
          .catch((error) => console.error("Error:", error));
      }

      function init() {
        cpuChart = new Chart(document.getElementById("cpuChart"), {
          type: "line",
          data: {
            labels: cpuHistory.labels,
            datasets: [
              {
                label: "CPU %",
                data: cpuHistory.points,
                borderColor: "#7aa2f7",
                backgroundColor: "rgba(122, 162, 247, 0.2)",
                fill: true,
                tension: 0.3,
              },
            ],
          },
          options: {
            animation: false,
            scales: {
              y: { min: 0, max: 100, ticks: { color: "#565f89" } },
              x: { ticks: { color: "#565f89" } },
            },
            plugins: { legend: { display: false } },
          },
        });

        applySnapshot(INITIAL);
        setInterval(poll, POLL_MS);
      }

      document.addEventListener("DOMContentLoaded", init);
    </script>
  </body>
</html>
"##;
