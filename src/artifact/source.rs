//! TypeScript stubs placed in the project's `src` directory.

use super::Artifact;

pub const HANDLER_PATH: &str = "src/handler.ts";
pub const MIDDLEWARE_PATH: &str = "src/middleware.ts";

const HANDLER: &str = r#"import { handler } from './middleware';

export const helloWorld = handler(
  async ({ request, aux }): Promise<{msg: string}> => {
    const { db, tracer, logger } = aux;
    console.log('hello world!');

    return { msg: 'hello world!' };
  },
);
"#;

// The AWS binding and the tracer are handed `undefined` configuration.
// Generated projects are expected to fill these in; no default is guessed.
const MIDDLEWARE: &str = r#"import {
  AWSPluginAux,
  LoggerPluginAux,
  LogLevel,
  middleware,
  MySQLPluginAux,
  TracerPluginAux,
} from 'serverless-simple-middleware';

export type Aux = AWSPluginAux &
  TracerPluginAux &
  LoggerPluginAux &
  MySQLPluginAux;

const dbConfiguration = {
  database: 'database name',
};

export const handler = middleware.build<Aux>([
  middleware.aws({
    config: undefined,
  }),
  middleware.trace({
    route: 'es:index/event',
    queueName: 'event_queue',
    system: 'AppName',
    awsConfig: undefined,
    region: 'ap-northeast-2',
  }),
  middleware.logger({
    name: __filename,
    level: LogLevel.Stupid,
  }),
  middleware.mysql({
    config: dbConfiguration,
  }),
]);
"#;

/// `helloWorld`, answering every request with `{ msg: 'hello world!' }`.
pub fn handler() -> Artifact {
    Artifact::new(HANDLER_PATH, HANDLER)
}

/// The middleware chain `handler` is built from: AWS, tracing, logging
/// and MySQL, in that order.
pub fn middleware() -> Artifact {
    Artifact::new(MIDDLEWARE_PATH, MIDDLEWARE)
}
