use super::super::package_manager::PackageManager;

/// The template files written for `manager`, as (relative path, content)
/// pairs in write order.
///
/// bun projects only get the entry point and .env: `bun init` already
/// provides .gitignore and tsconfig.json, and `bun --watch` replaces
/// nodemon.
pub fn files(manager: PackageManager) -> Vec<(&'static str, &'static str)> {
    match manager {
        PackageManager::Bun => vec![("src/index.ts", index_ts()), (".env", env_file())],
        _ => vec![
            ("src/index.ts", index_ts()),
            (".gitignore", gitignore()),
            ("nodemon.json", nodemon_json()),
            ("tsconfig.json", tsconfig_json()),
            (".env", env_file()),
        ],
    }
}

pub fn index_ts() -> &'static str {
    r#"import * as dotenv from "dotenv";
import express, { json } from 'express';
import cors from "cors";

dotenv.config();

const app = express();
app.use(cors());
app.use(json());

const port = process.env.PORT || 3000;

app.get('/', (req, res) => {
  res.send('Hello, Express with TypeScript!');
});

app.listen(port, () => {
  console.log(`🚀 Server is running at http://localhost:${port}`);
});
"#
}

pub fn env_file() -> &'static str {
    "# Add your environment variables here\nPORT=3000\n"
}

pub fn gitignore() -> &'static str {
    "node_modules\ndist\n.env\n"
}

pub fn nodemon_json() -> &'static str {
    r#"{
  "watch": ["src", ".env"],
  "ext": "ts,js,json,env",
  "ignore": [
    "src/**/*.test.ts",
    "src/**/*.spec.ts",
    "dist/",
    "node_modules/",
    "*.log",
    "coverage/",
    ".git/"
  ],
  "exec": "tsx src/index.ts",
  "env": {
    "NODE_ENV": "development"
  },
  "delay": 1000,
  "verbose": true,
  "restartable": "rs",
  "colours": true,
  "legacyWatch": false,
  "signal": "SIGTERM",
  "stdout": true
}
"#
}

pub fn tsconfig_json() -> &'static str {
    r#"{
  "compilerOptions": {
    "outDir": "./dist",
    "rootDir": "./src",
    "module": "CommonJS",
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true,
    "skipLibCheck": true,
    "target": "ES6",
    "strict": true
  }
}
"#
}
